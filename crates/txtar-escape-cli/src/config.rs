//! Configuration loading for the CLI.
//!
//! Only the configuration file location is forwarded to `ortho-config`; the
//! remaining flags are parsed by clap and layered on top of the loaded values
//! by [`crate::command::RewriteInvocation::resolve`].

use std::ffi::OsString;
use std::path::Path;

use ortho_config::OrthoConfig;
use txtar_escape_config::Config;

use crate::errors::AppError;

const PROGRAM_NAME: &str = "txtar-escape";
const CONFIG_PATH_FLAG: &str = "--config-path";

pub(crate) trait ConfigLoader {
    /// Loads defaults, file, and environment layers.
    fn load(&self, config_path: Option<&Path>) -> Result<Config, AppError>;
}

pub(crate) struct OrthoConfigLoader;

impl ConfigLoader for OrthoConfigLoader {
    fn load(&self, config_path: Option<&Path>) -> Result<Config, AppError> {
        Config::load_from_iter(loader_arguments(config_path)).map_err(AppError::LoadConfiguration)
    }
}

fn loader_arguments(config_path: Option<&Path>) -> Vec<OsString> {
    let mut arguments = vec![OsString::from(PROGRAM_NAME)];
    if let Some(path) = config_path {
        arguments.push(OsString::from(CONFIG_PATH_FLAG));
        arguments.push(path.as_os_str().to_owned());
    }
    arguments
}
