//! sopsenv - Load encrypted configuration without leaking it.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── show          # Typed record report
//! │   ├── env           # Export to the environment and report it
//! │   ├── run           # Run a command with the exported environment
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .sopsenv.toml management
//!     ├── decrypt       # External decryptor boundary
//!     ├── document      # dotenv / YAML parsing
//!     ├── schema        # Declarative field table and typed record
//!     ├── mapper        # Entries -> typed record
//!     ├── classify      # Sensitive name detection
//!     ├── mask          # Display masking
//!     ├── environ       # Environment providers and export
//!     ├── present       # Masked reports
//!     └── loader        # Load operations
//! ```
//!
//! # Example
//!
//! ```no_run
//! use sopsenv::core::{ExternalCommand, Loader, Visibility};
//! use sopsenv::core::present::render_record;
//!
//! let record = Loader::new(ExternalCommand::sops()).load_record("config.sops.env")?;
//! render_record(&mut std::io::stdout(), &record, Visibility::Masked)?;
//! # Ok::<(), sopsenv::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
