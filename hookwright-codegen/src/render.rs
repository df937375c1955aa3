//! Solidity source rendering.
//!
//! Rendering is a pure function of the [`ContractModel`]; everything that
//! can fail has already failed in the pipeline.

use hookwright_options::Permission;

use crate::{
    builder::CodeBuilder,
    model::{ContractModel, Function},
};

/// Compiler version constraint emitted in the pragma.
pub const SOLIDITY_VERSION: &str = "^0.8.26";

/// Lines longer than this, indentation included, are broken up.
pub const MAX_LINE_WIDTH: usize = 100;

/// Render a contract model to Solidity source.
pub fn render(model: &ContractModel) -> String {
    let mut builder = CodeBuilder::solidity();

    builder
        .push_line(&format!("// SPDX-License-Identifier: {}", model.license))
        .push_line(&format!("pragma solidity {};", SOLIDITY_VERSION))
        .push_blank();
    if !model.imports.is_empty() {
        builder.push_lines(model.imports.lines()).push_blank();
    }

    if let Some(contact) = &model.security_contact {
        builder.push_natspec(&format!("@custom:security-contact {}", contact));
    }
    let header = if model.parents.is_empty() {
        format!("contract {} {{", model.name)
    } else {
        format!("contract {} is {} {{", model.name, model.parents.join(", "))
    };

    builder.push_block(&header, "}", |b| {
        let mut sections = Sections::default();

        if !model.using.is_empty() {
            sections.next(b);
            for directive in &model.using {
                b.push_line(&format!("using {};", directive));
            }
        }

        if !model.state_vars.is_empty() {
            sections.next(b);
            b.push_lines(&model.state_vars);
        }

        sections.next(b);
        let constructor = &model.constructor;
        let params: Vec<String> = constructor.params.iter().map(ToString::to_string).collect();
        push_callable(
            b,
            "constructor",
            &params,
            &constructor.inits,
            &constructor.body,
        );

        for function in model.functions.iter().chain(&model.hooks) {
            sections.next(b);
            push_function(b, function);
        }

        sections.next(b);
        push_hook_permissions(b, model);

        for function in &model.interface_overrides {
            sections.next(b);
            push_function(b, function);
        }
    });

    builder.build()
}

/// Separates contract members with one blank line.
#[derive(Default)]
struct Sections {
    started: bool,
}

impl Sections {
    fn next(&mut self, b: &mut CodeBuilder) {
        if self.started {
            b.push_blank();
        }
        self.started = true;
    }
}

fn push_function(b: &mut CodeBuilder, function: &Function) {
    push_callable(
        b,
        &format!("function {}", function.name),
        &function.params,
        &function.attributes,
        &function.body,
    );
}

/// Push a constructor or function with its body.
fn push_callable(
    b: &mut CodeBuilder,
    head: &str,
    params: &[String],
    modifiers: &[String],
    body: &[String],
) {
    push_header(b, head, params, modifiers, body.is_empty());
    if !body.is_empty() {
        b.push_indent().push_lines(body).push_dedent().push_line("}");
    }
}

/// Push a declaration header ending in `{` (or `{}` when the body is empty).
///
/// Tries, in order: everything on one line; parameters on the first line
/// with one modifier per line; one parameter per line.
fn push_header(b: &mut CodeBuilder, head: &str, params: &[String], modifiers: &[String], empty: bool) {
    let opener = if empty { "{}" } else { "{" };
    let column = b.current_column();
    let fits = |line: &str| column + line.len() <= MAX_LINE_WIDTH;

    let signature = format!("{}({})", head, params.join(", "));
    let one_line = if modifiers.is_empty() {
        format!("{} {}", signature, opener)
    } else {
        format!("{} {} {}", signature, modifiers.join(" "), opener)
    };
    if fits(&one_line) {
        b.push_line(&one_line);
        return;
    }

    if fits(&signature) {
        b.push_line(&signature);
        b.push_indent().push_lines(modifiers).push_dedent();
        b.push_line(opener);
        return;
    }

    b.push_line(&format!("{}(", head));
    b.push_indent();
    for (i, param) in params.iter().enumerate() {
        if i + 1 < params.len() {
            b.push_line(&format!("{},", param));
        } else {
            b.push_line(param);
        }
    }
    b.push_dedent();

    let tail = if modifiers.is_empty() {
        format!(") {}", opener)
    } else {
        format!(") {} {}", modifiers.join(" "), opener)
    };
    if fits(&tail) {
        b.push_line(&tail);
    } else {
        b.push_line(")");
        b.push_indent().push_lines(modifiers).push_dedent();
        b.push_line(opener);
    }
}

fn push_hook_permissions(b: &mut CodeBuilder, model: &ContractModel) {
    let modifiers = [
        "public".to_string(),
        "pure".to_string(),
        "override".to_string(),
        "returns (Hooks.Permissions memory)".to_string(),
    ];
    push_header(b, "function getHookPermissions", &[], &modifiers, false);
    b.push_indent();
    b.push_block("return Hooks.Permissions({", "});", |b| {
        for (i, permission) in Permission::ALL.iter().enumerate() {
            let separator = if i + 1 < Permission::ALL.len() { "," } else { "" };
            b.push_line(&format!(
                "{}: {}{}",
                permission.as_str(),
                model.permissions.contains(*permission),
                separator
            ));
        }
    });
    b.push_dedent().push_line("}");
}
