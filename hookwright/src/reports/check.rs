//! Check command report data structures.

use super::output::{Output, Report};

/// What generation would produce, without the source text.
#[derive(Debug)]
pub struct CheckReport {
    /// Contract name.
    pub name: String,
    /// Parent contracts, in inheritance order.
    pub parents: Vec<String>,
    /// Selected components, linearized.
    pub components: Vec<String>,
    /// Enabled permission flags.
    pub permissions: Vec<String>,
    /// Emitted lifecycle overrides.
    pub hooks: Vec<String>,
    /// Other emitted function signatures.
    pub functions: Vec<String>,
    pub access_required: bool,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }
        if !self.warnings.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        out.title(&self.name);
        out.key_value("is", &self.parents.join(", "));
        out.key_value(
            "access control",
            if self.access_required {
                "required"
            } else {
                "not required"
            },
        );
        out.newline();

        out.section("Components");
        for (i, component) in self.components.iter().enumerate() {
            out.numbered_item(i + 1, component);
        }

        if !self.permissions.is_empty() {
            out.newline();
            out.section("Permissions");
            for permission in &self.permissions {
                out.list_item(permission);
            }
        }

        if !self.functions.is_empty() || !self.hooks.is_empty() {
            out.newline();
            out.section("Functions");
            for function in self.functions.iter().chain(&self.hooks) {
                out.list_item(function);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Output for Recorder {
        fn title(&mut self, text: &str) {
            self.0.push(format!("# {}", text));
        }
        fn section(&mut self, name: &str) {
            self.0.push(format!("{}:", name));
        }
        fn key_value(&mut self, key: &str, value: &str) {
            self.0.push(format!("{}: {}", key, value));
        }
        fn numbered_item(&mut self, index: usize, text: &str) {
            self.0.push(format!("{}. {}", index, text));
        }
        fn list_item(&mut self, text: &str) {
            self.0.push(format!("- {}", text));
        }
        fn warning(&mut self, msg: &str) {
            self.0.push(format!("warning: {}", msg));
        }
        fn preformatted(&mut self, text: &str) {
            self.0.push(text.to_string());
        }
        fn newline(&mut self) {
            self.0.push(String::new());
        }
    }

    #[test]
    fn test_render() {
        let report = CheckReport {
            name: "MyHook".into(),
            parents: vec!["BaseHook".into(), "Ownable".into(), "Pausable".into()],
            components: vec![
                "hook:BaseHook".into(),
                "access:ownable".into(),
                "pausable".into(),
            ],
            permissions: vec!["beforeSwap".into()],
            hooks: vec!["_beforeSwap".into()],
            functions: vec!["pause()".into(), "unpause()".into()],
            access_required: true,
            warnings: vec![],
            infos: vec!["access defaulted".into()],
        };

        let mut out = Recorder::default();
        report.render(&mut out);
        assert_eq!(
            out.0,
            vec![
                "info: access defaulted",
                "",
                "# MyHook",
                "is: BaseHook, Ownable, Pausable",
                "access control: required",
                "",
                "Components:",
                "1. hook:BaseHook",
                "2. access:ownable",
                "3. pausable",
                "",
                "Permissions:",
                "- beforeSwap",
                "",
                "Functions:",
                "- pause()",
                "- unpause()",
                "- _beforeSwap",
            ]
        );
    }

    #[test]
    fn test_render_warnings_before_summary() {
        let report = CheckReport {
            name: "MyHook".into(),
            parents: vec!["BaseHook".into()],
            components: vec!["hook:BaseHook".into()],
            permissions: vec![],
            hooks: vec![],
            functions: vec![],
            access_required: false,
            warnings: vec!["shares.name is ignored".into()],
            infos: vec![],
        };

        let mut out = Recorder::default();
        report.render(&mut out);
        assert_eq!(
            out.0,
            vec![
                "warning: shares.name is ignored",
                "",
                "# MyHook",
                "is: BaseHook",
                "access control: not required",
                "",
                "Components:",
                "1. hook:BaseHook",
            ]
        );
    }
}
