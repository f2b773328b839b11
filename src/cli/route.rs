//! CLI route: single route table and run context. Dispatches to the
//! enrollment services and report rendering.

use crate::cli::parse::{Commands, InputFiles};
use crate::config::{ConfigLoader, SocialqConfig};
use crate::enrollment::{report, EnrollmentFiles, ReportFormat};
use crate::error::EnrollmentError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Runtime context for CLI execution: workspace and effective configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: SocialqConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, EnrollmentError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        config.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            EnrollmentError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;

        Ok(Self::with_config(workspace_root, config))
    }

    /// Context over an already loaded configuration.
    pub fn with_config(workspace_root: PathBuf, config: SocialqConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn config(&self) -> &SocialqConfig {
        &self.config
    }

    /// Run one command and return what should be printed on stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, EnrollmentError> {
        match command {
            Commands::Enroll {
                inputs,
                out,
                format,
            } => self.handle_enroll(inputs, out.as_deref(), format),
            Commands::Inspect { inputs, format } => self.handle_inspect(inputs, format),
            Commands::Config => Ok(self.config.to_toml()?),
        }
    }

    fn handle_enroll(
        &self,
        inputs: &InputFiles,
        out: Option<&Path>,
        format: &str,
    ) -> Result<String, EnrollmentError> {
        let format: ReportFormat = format.parse()?;
        let mut system = self.resolve(inputs).load(self.config.enrollment.clone())?;
        let outcome = system.hack_enrollment()?;

        let mut rendered = match format {
            ReportFormat::Text => report::render_text(&system, outcome),
            ReportFormat::Json => report::render_json(&system, outcome)?,
        };

        match out {
            Some(path) => {
                let path = self.workspace_root.join(path);
                std::fs::write(&path, &rendered)?;
                info!(path = %path.display(), "Enrollment report written");
                Ok(String::new())
            }
            None => {
                if format == ReportFormat::Json {
                    rendered.push('\n');
                }
                Ok(rendered)
            }
        }
    }

    fn handle_inspect(&self, inputs: &InputFiles, format: &str) -> Result<String, EnrollmentError> {
        let format: ReportFormat = format.parse()?;
        let system = self.resolve(inputs).load(self.config.enrollment.clone())?;
        let summaries = report::summarize(&system);
        match format {
            ReportFormat::Text => Ok(format!("{}\n", report::render_inspect_table(&summaries))),
            ReportFormat::Json => Ok(format!("{}\n", report::render_inspect_json(&summaries)?)),
        }
    }

    /// Record file paths taken relative to the workspace root.
    fn resolve(&self, inputs: &InputFiles) -> EnrollmentFiles {
        let root = &self.workspace_root;
        EnrollmentFiles {
            students: root.join(&inputs.students),
            courses: root.join(&inputs.courses),
            hackers: root.join(&inputs.hackers),
            queues: root.join(&inputs.queues),
        }
    }
}
