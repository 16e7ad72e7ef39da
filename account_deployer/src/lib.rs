//!
//! The account deployer library.
//!

pub mod artifacts;
pub mod chain;
pub mod compilers;
pub mod config;
pub mod console;
pub mod deployer;
pub mod environment;
pub mod scripts;
pub(crate) mod utils;

pub use self::artifacts::deployment::Deployment as DeploymentRecord;
pub use self::artifacts::Artifact;
pub use self::chain::http::HttpChain;
pub use self::chain::Chain;
pub use self::compilers::project::Project;
pub use self::config::network::name::Name as NetworkName;
pub use self::config::network::Network;
pub use self::config::Config;
pub use self::console::Console;
pub use self::deployer::request::Request as DeploymentRequest;
pub use self::deployer::result::Result as DeploymentResult;
pub use self::deployer::Deployer;
pub use self::environment::Environment;

/// The success exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;
