//! Depth-first rendering of a parsed tag tree.

use std::io::{self, Write};

use crate::types::Node;

/// Renders `root` and its subtree in strict pre-order, one line per
/// node. A sink failure short-circuits the traversal; nothing is
/// retried or re-rendered.
pub fn render<W: Write>(root: &Node, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", root.kind.render_line())?;
    for child in &root.children {
        render(child, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TagKind;

    #[test]
    fn render_emits_one_line_per_node_in_pre_order() {
        let mut root = Node::new(0, TagKind::Html);
        root.children.push(Node::new(1, TagKind::Meta));
        root.children.push(Node::new(2, TagKind::P));

        let mut out = Vec::new();
        render(&root, &mut out).expect("render into Vec cannot fail");
        let text = String::from_utf8(out).expect("render output is UTF-8");
        assert_eq!(
            text,
            "html tag rendered\nmeta tag rendered\np tag rendered\n"
        );
    }

    #[test]
    fn render_short_circuits_on_sink_failure() {
        struct FailingSink {
            writes: usize,
        }

        impl Write for FailingSink {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                if self.writes == 0 {
                    return Err(io::Error::other("sink full"));
                }
                self.writes -= 1;
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut root = Node::new(0, TagKind::Html);
        root.children.push(Node::new(1, TagKind::P));

        // One successful write, then the sink fails; the child line
        // must not be attempted again.
        let mut sink = FailingSink { writes: 1 };
        let error = render(&root, &mut sink).expect_err("second write fails");
        assert_eq!(error.to_string(), "sink full");
        assert_eq!(sink.writes, 0, "expected no writes after the failure");
    }
}
