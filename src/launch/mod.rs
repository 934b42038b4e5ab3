//! Launch configurations and the `.vscode/launch.json` file that holds them.

mod config;
mod file;
mod reconcile;

pub use config::{synthesize, LaunchConfig, GO_DEBUG_TYPE, LAUNCH_REQUEST, TEST_RUN_FLAG};
pub use file::{find_config_position, LaunchFile, CONFIGURATIONS_KEY, LAUNCH_PATH};
pub use reconcile::{reconcile, ReconcileResult};
