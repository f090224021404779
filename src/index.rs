//! Typed vertex identifiers.
//!
//! Vertices are addressed by dense indices `0..order`. The index type is a thin
//! newtype so that vertex identifiers can not be confused with counts or
//! positions in a neighbour list.
use std::fmt;

/// Conversion between a typed index and its position in a backing sequence.
pub trait EntityIndex: Copy + Eq + Default {
    /// Creates an index from a position.
    ///
    /// # Panics
    ///
    /// Panics if the position does not fit into the backing integer type.
    fn new(index: usize) -> Self {
        match Self::try_new(index) {
            Some(entity) => entity,
            None => panic!("index {index} does not fit into the index type"),
        }
    }

    /// Creates an index from a position, if it fits into the backing integer type.
    fn try_new(index: usize) -> Option<Self>;

    /// Returns the position this index refers to.
    fn index(self) -> usize;
}

/// Provides the common implementation of an index backed by an unsigned integer.
///
/// Based on [`cranelift_entity`'s `entity_impl!`](https://docs.rs/cranelift-entity/0.89.2/cranelift_entity/macro.entity_impl.html)
macro_rules! entity_impl {
    ($entity:ident, $backing:ty) => {
        impl $crate::index::EntityIndex for $entity {
            #[inline(always)]
            fn try_new(ix: usize) -> Option<Self> {
                <$backing>::try_from(ix).ok().map($entity)
            }

            #[inline(always)]
            fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl $entity {
            /// Creates an index from a position.
            ///
            /// # Panics
            ///
            /// Panics if the position does not fit into the backing integer type.
            #[inline]
            pub fn new(index: usize) -> Self {
                <Self as $crate::index::EntityIndex>::new(index)
            }

            /// Creates an index from a position, if it fits.
            #[inline]
            pub fn try_new(index: usize) -> Option<Self> {
                <Self as $crate::index::EntityIndex>::try_new(index)
            }

            /// Returns the position this index refers to.
            #[inline]
            pub fn index(self) -> usize {
                <Self as $crate::index::EntityIndex>::index(self)
            }
        }
    };
}

/// Identifier of a vertex, equal to its position in the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexIndex(u32);

entity_impl!(VertexIndex, u32);

impl fmt::Display for VertexIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for VertexIndex {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
