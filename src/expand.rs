//! Expansion of a node sequence back into the original bytes.

use crate::codec::DecodeMode;
use crate::error::{PrsError, Result};
use crate::node::Node;
use crate::notification::{NotificationCollection, NotificationType};

/// Walk `nodes` and reconstruct the original bytes, returning exactly
/// `expected_len` bytes.
///
/// Copies run strictly byte-at-a-time: the source and destination regions
/// of one copy may overlap, and run-length expansion relies on reading
/// bytes the same copy wrote a step earlier. A bulk block copy would break
/// that.
///
/// Producing more than `expected_len` bytes is always
/// [`PrsError::BufferOverflow`], in either mode. In lenient mode a copy
/// that reaches outside the produced output stops expansion best-effort
/// and a short result is zero-padded, both with notifications; strict mode
/// turns them into errors.
pub fn expand(
    nodes: &[Node],
    expected_len: usize,
    mode: DecodeMode,
    notifications: &mut NotificationCollection,
) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.try_reserve_exact(expected_len)?;

    for node in nodes {
        let (length, offset) = match *node {
            Node::Terminator => break,
            Node::Literal(byte) => {
                if out.len() == expected_len {
                    return Err(PrsError::BufferOverflow {
                        expected: expected_len,
                    });
                }
                out.push(byte);
                continue;
            }
            Node::ShortCopy { length, offset } => (length as usize, offset as usize),
            Node::LongCopy { length, offset } => (length as usize, offset as usize),
        };

        if offset == 0 || offset > out.len() {
            if mode == DecodeMode::Strict {
                return Err(PrsError::InvalidBackReference {
                    offset,
                    available: out.len(),
                });
            }
            notifications.notify(
                NotificationType::Error,
                format!(
                    "copy reaches {} bytes back with only {} produced; expansion stopped",
                    offset,
                    out.len()
                ),
            );
            break;
        }

        for _ in 0..length {
            if out.len() == expected_len {
                return Err(PrsError::BufferOverflow {
                    expected: expected_len,
                });
            }
            let byte = out[out.len() - offset];
            out.push(byte);
        }
    }

    if out.len() < expected_len {
        if mode == DecodeMode::Strict {
            return Err(PrsError::SizeMismatch {
                expected: expected_len,
                produced: out.len(),
            });
        }
        notifications.notify(
            NotificationType::Warning,
            format!(
                "stream produced {} of {} declared bytes; output zero-padded",
                out.len(),
                expected_len
            ),
        );
        out.resize(expected_len, 0);
    }

    Ok(out)
}
