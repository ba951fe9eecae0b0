//! The split plan: which function goes to which file
//!
//! One declarative table drives the whole run. Each step entry names the
//! function to extract, the file it lands in, the comment and messages for
//! its entry-point block, and the unit-specific rename rules. The config
//! module, main script, and README are fixed-name units without a step
//! entry.

use crate::splitter::rules::{
    Rule, RENAME_CHECK_PORT, RENAME_CONFIGURE_CLI_RETRY, RENAME_FIND_DEVICE_PORT,
    RENAME_SHOW_BUILD_LOGS,
};

/// One step script to generate.
#[derive(Debug, Clone, Copy)]
pub struct StepSpec {
    /// Name of the method extracted from the source class.
    pub function: &'static str,
    /// Output filename.
    pub filename: &'static str,
    /// Comment above the invocation in the entry-point block.
    pub run_comment: &'static str,
    /// Printed (after a blank line) when the step returns truthy.
    pub success: &'static str,
    /// Printed (after a blank line) before exiting non-zero.
    pub failure: &'static str,
    /// Unit-specific renames, applied before the generic rules.
    pub renames: &'static [Rule],
}

/// Initializer extracted into the configuration module.
pub const INIT_FUNCTION: &str = "__init__";

/// Fixed output filenames that are not step scripts.
pub const CONFIG_FILENAME: &str = "esp_thread_config.py";
pub const MAIN_FILENAME: &str = "main.py";
pub const README_FILENAME: &str = "README.md";

/// The eight step scripts, in generation order.
pub const STEPS: [StepSpec; 8] = [
    StepSpec {
        function: "check_prerequisites",
        filename: "check_prerequisites.py",
        run_comment: "Run the check",
        success: "Prerequisites check completed successfully.",
        failure: "Prerequisites check failed. Please address the issues and try again.",
        renames: &[],
    },
    StepSpec {
        function: "download_repositories",
        filename: "download_repositories.py",
        run_comment: "Run the download",
        success: "Repositories downloaded successfully.",
        failure: "Failed to download repositories. Please check your internet connection and try again.",
        renames: &[],
    },
    StepSpec {
        function: "build_rcp_firmware",
        filename: "build_rcp_firmware.py",
        run_comment: "Run the build",
        success: "RCP firmware built successfully.",
        failure: "Failed to build RCP firmware. Please check the logs and try again.",
        renames: &[RENAME_SHOW_BUILD_LOGS],
    },
    StepSpec {
        function: "setup_border_router",
        filename: "setup_border_router.py",
        run_comment: "Run the setup",
        success: "Border Router set up successfully.",
        failure: "Failed to set up Border Router. Please check the logs and try again.",
        renames: &[RENAME_FIND_DEVICE_PORT],
    },
    StepSpec {
        function: "build_and_flash_cli",
        filename: "build_and_flash_cli.py",
        run_comment: "Run the build and flash",
        success: "CLI built and flashed successfully.",
        failure: "Failed to build and flash CLI. Please check the logs and try again.",
        renames: &[RENAME_FIND_DEVICE_PORT, RENAME_SHOW_BUILD_LOGS],
    },
    StepSpec {
        function: "create_dataset",
        filename: "create_dataset.py",
        run_comment: "Run the dataset creation",
        success: "Thread network dataset created successfully.",
        failure: "Failed to create Thread network dataset. Please check the logs and try again.",
        renames: &[RENAME_FIND_DEVICE_PORT, RENAME_CHECK_PORT],
    },
    StepSpec {
        function: "configure_cli",
        filename: "configure_cli.py",
        run_comment: "Run the CLI configuration",
        success: "CLI configured successfully.",
        failure: "Failed to configure CLI. Please check the logs and try again.",
        renames: &[
            RENAME_FIND_DEVICE_PORT,
            RENAME_CHECK_PORT,
            RENAME_CONFIGURE_CLI_RETRY,
        ],
    },
    StepSpec {
        function: "setup_web_gui",
        filename: "setup_web_gui.py",
        run_comment: "Run the web GUI setup",
        success: "Web GUI set up successfully.",
        failure: "Failed to set up Web GUI. Please check the logs and try again.",
        renames: &[],
    },
];

/// Every filename the splitter writes, in write order.
pub fn output_filenames() -> Vec<&'static str> {
    let mut names = vec![CONFIG_FILENAME];
    names.extend(STEPS.iter().map(|s| s.filename));
    names.push(MAIN_FILENAME);
    names.push(README_FILENAME);
    names
}
