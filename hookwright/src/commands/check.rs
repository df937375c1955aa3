use clap::Args;
use eyre::Result;
use hookwright_codegen::{Generated, Registry, Severity, generate, is_access_control_required};
use hookwright_options::PartialOptions;

use super::{UnwrapOrExit, options::OptionArgs};
use crate::reports::{CheckReport, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub options: OptionArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let options = self.options.load().unwrap_or_exit();
        let generated = generate(&options, Registry::builtin()).unwrap_or_exit();

        build_report(&options, &generated).render(&mut TerminalOutput::new());
        Ok(())
    }
}

fn build_report(options: &PartialOptions, generated: &Generated) -> CheckReport {
    let model = &generated.model;

    let mut warnings = Vec::new();
    let mut infos = Vec::new();
    for diag in &generated.diagnostics {
        let msg = match &diag.location {
            Some(loc) => format!("{}\n  --> {}", diag.message, loc),
            None => diag.message.clone(),
        };
        match diag.severity {
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    CheckReport {
        name: model.name.clone(),
        parents: model.parents.clone(),
        components: model.components.iter().map(ToString::to_string).collect(),
        permissions: model
            .permissions
            .iter()
            .map(|permission| permission.as_str().to_string())
            .collect(),
        hooks: model.hook_names().map(str::to_string).collect(),
        functions: model.functions.iter().map(|f| f.signature()).collect(),
        access_required: is_access_control_required(options),
        warnings,
        infos,
    }
}
