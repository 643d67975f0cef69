//! Tree formatter for console output
//!
//! This module provides `TreeFormatter`, which renders a `TreeNode` tree and
//! its expansion set either as plain text or with colours on stdout.

use std::collections::BTreeSet;
use std::io;

use termcolor::{Buffer, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeNode;

use super::config::RenderConfig;
use super::utils::{
    COLLAPSED_MARKER, EXPANDED_MARKER, brackets, child_prefix, connector, dimmed_style, key_style,
    value_style,
};

/// Formatter for value trees.
pub struct TreeFormatter {
    config: RenderConfig,
}

impl TreeFormatter {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render to a plain string, ignoring the colour setting.
    pub fn format(&self, root: &TreeNode, expanded: &BTreeSet<String>) -> String {
        let mut buffer = Buffer::no_color();
        // Writes into an in-memory buffer cannot fail
        let _ = self.write(&mut buffer, root, expanded);
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    pub fn print(&self, root: &TreeNode, expanded: &BTreeSet<String>) -> io::Result<()> {
        // Terminal detection already happened when `use_color` was set
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let stdout = StandardStream::stdout(choice);
        let mut lock = stdout.lock();
        self.write(&mut lock, root, expanded)
    }

    /// Render to any colour-capable writer.
    pub fn write<W: WriteColor>(
        &self,
        out: &mut W,
        root: &TreeNode,
        expanded: &BTreeSet<String>,
    ) -> io::Result<()> {
        if let Some(title) = &self.config.title {
            out.set_color(ColorSpec::new().set_bold(true))?;
            writeln!(out, "{}", title)?;
            out.reset()?;
        }
        self.write_node(out, root, expanded, "", true, true)?;
        writeln!(out)?;
        writeln!(
            out,
            "{} branches, {} leaves",
            root.branch_count(),
            root.leaf_count()
        )?;
        Ok(())
    }

    fn write_node<W: WriteColor>(
        &self,
        out: &mut W,
        node: &TreeNode,
        expanded: &BTreeSet<String>,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> io::Result<()> {
        let guides = self.config.show_indent_guides;
        if !is_root {
            write!(out, "{}{}", prefix, connector(is_last, guides))?;
        }

        let is_open = node.is_branch() && expanded.contains(&node.address);
        if node.is_branch() {
            write!(out, "{}", if is_open { EXPANDED_MARKER } else { COLLAPSED_MARKER })?;
        }

        if let Some(label) = &node.label {
            out.set_color(&key_style())?;
            write!(out, "{}", label)?;
            out.reset()?;
            write!(out, ": ")?;
        }

        if !node.is_branch() {
            out.set_color(&value_style(node.category))?;
            write!(out, "{}", node.display())?;
            out.reset()?;
            return writeln!(out);
        }

        let (open_bracket, close_bracket) = brackets(node.category);
        out.set_color(&dimmed_style())?;
        if is_open {
            write!(out, "{}", open_bracket)?;
        } else {
            write!(out, "{}...{}", open_bracket, close_bracket)?;
        }
        out.reset()?;
        if !is_open && self.config.show_items_count {
            if let Some(count) = node.item_count {
                write!(out, " ({})", count)?;
            }
        }
        writeln!(out)?;

        if is_open {
            let new_prefix = child_prefix(prefix, is_last, is_root, guides);
            let children = node.child_nodes();
            for (i, child) in children.iter().enumerate() {
                let child_is_last = i == children.len() - 1;
                self.write_node(out, child, expanded, &new_prefix, child_is_last, false)?;
            }
        }
        Ok(())
    }
}
