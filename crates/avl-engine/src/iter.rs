//! In-order iteration over a live [`Engine`].
//!
//! The iterator's only state is the last value yielded (or "unstarted").
//! Each step re-descends from the root via `higher`, trading per-step cost
//! for O(1) iterator state — the right trade for a disk-resident tree,
//! where carrying a full ancestor stack in the iterator would defeat the
//! memory-minimality goal. This is not an amortized-O(1) in-order walk.

use crate::Engine;
use crate::error::EngineResult;
use crate::queries;
use avl_node::PayloadCodec;

/// In-order iterator produced by [`Engine::iter`].
pub struct OrderedIter<'e, T, C> {
    engine: &'e Engine<T, C>,
    last: Option<T>,
    started: bool,
}

impl<'e, T, C> OrderedIter<'e, T, C>
where
    T: Ord + Clone,
    C: PayloadCodec<T>,
{
    pub(crate) fn new(engine: &'e Engine<T, C>) -> Self {
        Self {
            engine,
            last: None,
            started: false,
        }
    }

    /// `true` iff another call to [`Iterator::next`] would yield a value.
    pub fn has_next(&self) -> EngineResult<bool> {
        if !self.started {
            return self.engine.locked(|header, _nodes, _codec| Ok(!header.is_empty()?));
        }

        let Some(last) = &self.last else {
            return Ok(false);
        };

        self.engine
            .locked(|header, nodes, codec| Ok(queries::higher(header, nodes, codec, last)?.is_some()))
    }
}

impl<'e, T, C> Iterator for OrderedIter<'e, T, C>
where
    T: Ord + Clone,
    C: PayloadCodec<T>,
{
    type Item = EngineResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = if !self.started {
            self.started = true;
            self.engine.locked(|header, nodes, codec| queries::first(header, nodes, codec))
        } else {
            let last = self.last.clone()?;
            self.engine
                .locked(move |header, nodes, codec| queries::higher(header, nodes, codec, &last))
        };

        match result {
            Ok(Some(value)) => {
                self.last = Some(value.clone());
                Some(Ok(value))
            }
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        }
    }
}
