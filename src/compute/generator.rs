//! Random tree generation for search inputs.

use std::mem;

use rand::prelude::*;
use rand_distr::Binomial;

use crate::schema::{Edge, GeneratorConfig, GeneratorConfigError, Graph, Node};

/// Generate a random tree with `config.nodes` nodes.
///
/// Grows breadth-first from node `"0"`. Every frontier node receives one to
/// three children (weights 1/4, 1/2, 1/4), each child being the
/// lowest-numbered unused node. Produces exactly `nodes - 1` edges.
pub fn generate_tree(config: &GeneratorConfig) -> Result<Graph, GeneratorConfigError> {
    config.validate()?;

    let mut rng = match config.random_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    Ok(grow_tree(config.nodes, &mut rng))
}

fn grow_tree<R: Rng>(n: usize, rng: &mut R) -> Graph {
    let nodes: Vec<Node> = (0..n).map(|i| Node::new(i.to_string())).collect();
    let mut links = Vec::with_capacity(n.saturating_sub(1));

    // 1 + Binomial(2, 0.5): P(1) = 1/4, P(2) = 1/2, P(3) = 1/4
    let extra_children = Binomial::new(2, 0.5).ok();

    let mut next_unused = 1;
    let mut frontier = vec![0usize];

    while next_unused < n && !frontier.is_empty() {
        let roots = mem::take(&mut frontier);
        for root in roots {
            let children = 1 + extra_children.as_ref().map_or(0, |d| d.sample(rng) as usize);
            for _ in 0..children {
                if next_unused >= n {
                    return Graph { nodes, links };
                }
                let child = next_unused;
                next_unused += 1;

                links.push(Edge::new(root.to_string(), child.to_string()));
                frontier.push(child);
            }
        }
    }

    Graph { nodes, links }
}
