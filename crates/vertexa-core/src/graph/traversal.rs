//! Depth-first traversal.
//!
//! The traversals here are iterative: each stack frame holds the live
//! neighbor iterator of one vertex, which reproduces the visiting order of
//! the textbook recursive DFS without growing the call stack.

use smallvec::SmallVec;
use vertexa_common::types::VertexId;
use vertexa_common::utils::error::Result;

use super::Graph;

/// Inline capacity of the traversal stack before it spills to the heap.
const INLINE_FRAMES: usize = 32;

/// Makes `visited` exactly `vertex_count` long, all `false`, if it is not already.
fn ensure_visited_len(visited: &mut Vec<bool>, vertex_count: usize) {
    if visited.len() != vertex_count {
        tracing::debug!(
            "resetting visited buffer of length {} for {} vertices",
            visited.len(),
            vertex_count
        );
        visited.clear();
        visited.resize(vertex_count, false);
    }
}

/// Visits every vertex reachable from `start` exactly once, in pre-order.
///
/// `visited` is shared with the caller so that repeated calls can partition
/// a graph; a buffer of the wrong length is reset to all `false` first.
/// Vertices already marked visited are neither entered nor reported.
///
/// Fails with [`Error::OutOfRange`](vertexa_common::Error::OutOfRange) if
/// `start` is invalid.
pub fn dfs<W, G, F>(graph: &G, start: VertexId, visited: &mut Vec<bool>, mut visit: F) -> Result<()>
where
    W: Clone,
    G: Graph<W> + ?Sized,
    F: FnMut(VertexId),
{
    graph.check_vertex(start)?;
    ensure_visited_len(visited, graph.vertex_count());

    if visited[start] {
        return Ok(());
    }
    visited[start] = true;
    visit(start);

    let mut stack: SmallVec<[_; INLINE_FRAMES]> = SmallVec::new();
    stack.push(graph.neighbors(start));

    while let Some(frame) = stack.last_mut() {
        match frame.next() {
            Some((next, _)) => {
                if !visited[next] {
                    visited[next] = true;
                    visit(next);
                    stack.push(graph.neighbors(next));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    Ok(())
}

/// Like [`dfs`], but reports each vertex when its subtree is finished.
///
/// This is the finish order Kosaraju's first pass needs.
pub fn dfs_post_order<W, G, F>(
    graph: &G,
    start: VertexId,
    visited: &mut Vec<bool>,
    mut finish: F,
) -> Result<()>
where
    W: Clone,
    G: Graph<W> + ?Sized,
    F: FnMut(VertexId),
{
    graph.check_vertex(start)?;
    ensure_visited_len(visited, graph.vertex_count());

    if visited[start] {
        return Ok(());
    }
    visited[start] = true;

    let mut stack: SmallVec<[_; INLINE_FRAMES]> = SmallVec::new();
    stack.push((start, graph.neighbors(start)));

    while let Some((vertex, frame)) = stack.last_mut() {
        match frame.next() {
            Some((next, _)) => {
                if !visited[next] {
                    visited[next] = true;
                    stack.push((next, graph.neighbors(next)));
                }
            }
            None => {
                let done = *vertex;
                stack.pop();
                finish(done);
            }
        }
    }

    Ok(())
}

/// Returns true if `to` is reachable from `from` (always true when equal).
pub fn has_path<W, G>(graph: &G, from: VertexId, to: VertexId) -> Result<bool>
where
    W: Clone,
    G: Graph<W> + ?Sized,
{
    graph.check_vertex(from)?;
    graph.check_vertex(to)?;

    if from == to {
        return Ok(true);
    }

    let mut visited = vec![false; graph.vertex_count()];
    visited[from] = true;
    let mut stack = vec![from];

    while let Some(vertex) = stack.pop() {
        for (next, _) in graph.neighbors(vertex) {
            if next == to {
                return Ok(true);
            }
            if !visited[next] {
                visited[next] = true;
                stack.push(next);
            }
        }
    }

    Ok(false)
}
