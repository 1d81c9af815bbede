/*!
# Graph Representations

A graph is composed of a [`VertexSet`] (which of the `MAX_NODES` slots are occupied)
and one [`Neighborhood`] per slot. Two neighborhood backends are available:

- [`SortedNeighborhood`]: sorted adjacency lists, see [`AdjListGraph`] (the default [`Graph`]),
- [`BitNeighborhood`]: rows of an adjacency matrix, see [`AdjMatrixGraph`].

Both report neighbors in ascending order and behave identically through the traits in [`ops`].
*/

use crate::{ops::*, *};

mod neighborhood;
mod simple;
mod vertex_set;

pub mod digest;

pub use neighborhood::*;
pub use simple::*;
pub use vertex_set::*;
