//! TypeScript declaration rendering
//!
//! Turns a declaration module into TypeScript source text. Output is
//! deterministic: two-space indent, one blank line between top-level
//! declarations, imports first (the resolver pass already prepended
//! them).

use crate::ir::{Declaration, Interface, Module, Property};

/// Render a full module to TypeScript declaration source
pub fn render_module(module: &Module) -> String {
    let mut out = String::new();
    let mut first = true;
    let mut prev_was_import = false;

    for decl in &module.declarations {
        let is_import = matches!(decl, Declaration::Import { .. });
        if !first && !(is_import && prev_was_import) {
            out.push('\n');
        }
        render_declaration(decl, &mut out);
        first = false;
        prev_was_import = is_import;
    }
    out
}

fn render_doc(doc: &Option<Vec<String>>, indent: &str, out: &mut String) {
    let lines = match doc {
        Some(lines) if !lines.is_empty() => lines,
        _ => return,
    };
    if lines.len() == 1 {
        out.push_str(indent);
        out.push_str("// ");
        out.push_str(&lines[0]);
        out.push('\n');
    } else {
        out.push_str(indent);
        out.push_str("/*\n");
        for line in lines {
            out.push_str(indent);
            out.push_str(" * ");
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(indent);
        out.push_str(" */\n");
    }
}

fn render_declaration(decl: &Declaration, out: &mut String) {
    match decl {
        Declaration::Import { names, from } => {
            out.push_str(&format!("import {{ {} }} from \"./{}\";\n", names.join(", "), from));
        }
        Declaration::PrimitiveAlias { name, target, doc } => {
            render_doc(doc, "", out);
            out.push_str(&format!("export type {name} = {target};\n"));
        }
        Declaration::UnionAlias { name, literals, doc } => {
            render_doc(doc, "", out);
            let union = literals
                .iter()
                .map(|l| format!("\"{l}\""))
                .collect::<Vec<_>>()
                .join(" | ");
            out.push_str(&format!("export type {name} = {union};\n"));
        }
        Declaration::ArrayAlias { name, item, doc } => {
            render_doc(doc, "", out);
            out.push_str(&format!("export type {name} = {item}[];\n"));
        }
        Declaration::Interface(iface) => render_interface(iface, out),
    }
}

fn render_member(member: &Property, out: &mut String) {
    render_doc(&member.doc, "  ", out);
    let marker = if member.optional { "?" } else { "" };
    let suffix = if member.is_array { "[]" } else { "" };
    out.push_str(&format!("  {}{marker}: {}{suffix};\n", member.name, member.type_ref));
}

fn render_interface(iface: &Interface, out: &mut String) {
    render_doc(&iface.doc, "", out);
    out.push_str("export interface ");
    out.push_str(&iface.name);
    if let Some(base) = &iface.extends {
        out.push_str(" extends ");
        out.push_str(base);
    }
    out.push_str(" {\n");
    for member in &iface.members {
        render_member(member, out);
    }
    if let Some(open) = &iface.open {
        render_doc(&open.doc, "  ", out);
        out.push_str("  [key: string]: any;\n");
    }
    out.push_str("}\n");
}
