//! Generator backed by Xcode's command line tools

use super::{check_version, GenerateRequest, ProjectGenerator};
use crate::error::ConvertError;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone)]
pub struct XcrunGenerator {
    program: OsString,
}

impl Default for XcrunGenerator {
    fn default() -> Self {
        Self::new("xcrun")
    }
}

impl XcrunGenerator {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for `safari-web-extension-converter`
    pub fn converter_args(request: &GenerateRequest) -> Vec<OsString> {
        // Trailing separator keeps the tool from treating the location as a file
        let mut location = request.location.clone().into_os_string();
        location.push(std::path::MAIN_SEPARATOR_STR);

        vec![
            "safari-web-extension-converter".into(),
            request.source_dir.clone().into_os_string(),
            "--project-location".into(),
            location,
            "--app-name".into(),
            request.app_name.clone().into(),
            "--bundle-identifier".into(),
            request.bundle_identifier.clone().into(),
            "--no-open".into(),
            "--force".into(),
            "--swift".into(),
            "--copy-resources".into(),
            request.platform.converter_flag().into(),
        ]
    }

    fn run(&self, args: &[OsString], cwd: Option<&Path>) -> Result<()> {
        let mut command = Command::new(&self.program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let rendered = render_command(&self.program, args);
        log::debug!("Running {}", rendered);

        let output = command
            .output()
            .with_context(|| format!("Failed to launch `{}`", rendered))?;

        if !output.status.success() {
            return Err(ConvertError::Generator {
                command: rendered,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl ProjectGenerator for XcrunGenerator {
    fn generate(&self, request: &GenerateRequest) -> Result<PathBuf> {
        log::info!(
            "Generating {} project for {} in {}",
            request.platform,
            request.app_name,
            request.location.display()
        );
        self.run(&Self::converter_args(request), None)?;
        Ok(request.project_dir())
    }

    fn set_version(&self, project_dir: &Path, version: &str) -> Result<()> {
        check_version(version)?;
        for subcommand in ["new-version", "new-marketing-version"] {
            let args: Vec<OsString> = vec!["agvtool".into(), subcommand.into(), version.into()];
            self.run(&args, Some(project_dir))
                .with_context(|| format!("Failed to set version {} in {}", version, project_dir.display()))?;
        }
        Ok(())
    }
}

fn render_command(program: &OsString, args: &[OsString]) -> String {
    std::iter::once(program)
        .chain(args)
        .map(|a| a.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Platform;

    fn request(platform: Platform) -> GenerateRequest {
        GenerateRequest {
            source_dir: PathBuf::from("../src/"),
            location: PathBuf::from("iOS"),
            app_name: "Recap!".to_string(),
            bundle_identifier: "free.law.recap".to_string(),
            platform,
        }
    }

    #[test]
    fn test_converter_args_shape() {
        let args: Vec<String> = XcrunGenerator::converter_args(&request(Platform::Ios))
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        assert_eq!(args[0], "safari-web-extension-converter");
        assert_eq!(args[1], "../src/");
        assert_eq!(args[3], format!("iOS{}", std::path::MAIN_SEPARATOR));
        assert!(args.contains(&"--force".to_string()));
        assert!(args.contains(&"--copy-resources".to_string()));
        assert_eq!(args.last().unwrap(), "--ios-only");
    }

    #[test]
    fn test_failed_tool_is_generator_error() {
        // `false` exits non-zero for any arguments
        let generator = XcrunGenerator::new("false");
        let err = generator.generate(&request(Platform::MacOs)).unwrap_err();
        match err.downcast_ref::<ConvertError>() {
            Some(ConvertError::Generator { command, .. }) => {
                assert!(command.starts_with("false safari-web-extension-converter"));
                assert!(command.ends_with("--macos-only"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_tool_is_error() {
        let generator = XcrunGenerator::new("/nonexistent/xcrun");
        assert!(generator.generate(&request(Platform::Ios)).is_err());
    }

    #[test]
    fn test_invalid_version_not_shelled_out() {
        let generator = XcrunGenerator::new("/nonexistent/xcrun");
        let err = generator.set_version(Path::new("."), "1.0-rc1").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConvertError>(),
            Some(ConvertError::InvalidVersion(_))
        ));
    }
}
