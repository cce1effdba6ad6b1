use crate::error::{HeatsortError, HsResult};
use fastrand::Rng;
use std::sync::Arc;

/// An ordered, index-indirected view over a shared backing collection.
///
/// Logical position `i` maps to `backing[index[i]]`. Clones share the
/// backing and own their index, so copying costs one `Vec<usize>`.
#[derive(Debug)]
pub struct Permutation<T> {
    backing: Arc<Vec<T>>,
    index: Vec<usize>,
}

// Manual impl: cloning never requires `T: Clone`, only the index is copied.
impl<T> Clone for Permutation<T> {
    fn clone(&self) -> Self {
        Self {
            backing: Arc::clone(&self.backing),
            index: self.index.clone(),
        }
    }
}

impl<T> Default for Permutation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Permutation<T> {
    pub fn new() -> Self {
        Self {
            backing: Arc::new(Vec::new()),
            index: Vec::new(),
        }
    }

    /// Identity arrangement over `items`.
    pub fn from_rows(items: Vec<T>) -> Self {
        Self::from_shared(Arc::new(items))
    }

    /// Identity arrangement over an already shared collection.
    pub fn from_shared(backing: Arc<Vec<T>>) -> Self {
        let index = (0..backing.len()).collect();
        Self { backing, index }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.backing.len(), self.index.len());
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn get(&self, i: usize) -> HsResult<&T> {
        match self.index.get(i) {
            Some(&j) => Ok(&self.backing[j]),
            None => Err(HeatsortError::OutOfRange {
                index: i,
                len: self.len(),
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.index.iter().map(move |&j| &self.backing[j])
    }

    pub fn index(&self) -> &[usize] {
        &self.index
    }

    pub fn backing(&self) -> &Arc<Vec<T>> {
        &self.backing
    }

    /// True when both permutations view the very same backing allocation.
    pub fn shares_backing(&self, other: &Permutation<T>) -> bool {
        Arc::ptr_eq(&self.backing, &other.backing)
    }

    pub fn reversed(&self) -> Self {
        let mut p = self.clone();
        p.index.reverse();
        p
    }

    /// Uniform Fisher-Yates shuffle of the arrangement.
    pub fn shuffle(&mut self, rng: &mut Rng) {
        rng.shuffle(&mut self.index);
    }

    /// Returns a rearranged copy: `k` distinct positions are drawn at random,
    /// put in random order, and rotated one slot by [`Permutation::shifted`].
    pub fn mutate(&self, k: usize, rng: &mut Rng) -> HsResult<Self> {
        let n = self.len();
        if k < 2 {
            return Err(HeatsortError::Config(format!(
                "Mutation size must be at least 2 (got {})",
                k
            )));
        }
        if k > n {
            return Err(HeatsortError::Config(format!(
                "Mutation size {} exceeds the number of rows ({})",
                k, n
            )));
        }

        let mut p = self.clone();
        if k == 2 {
            let a = rng.usize(0..n);
            let mut b = rng.usize(0..n - 1);
            if b >= a {
                b += 1;
            }
            p.index.swap(a, b);
            return Ok(p);
        }

        let mut positions = Vec::with_capacity(k);
        while positions.len() < k {
            let i = rng.usize(0..n);
            if !positions.contains(&i) {
                positions.push(i);
            }
        }
        rng.shuffle(&mut positions);
        p.shift(&positions);
        Ok(p)
    }

    /// Generalized swap over the ordered `positions`:
    /// `[i, j]` swaps, `[i, j, k]` maps `index[i, j, k] = index[j, k, i]`.
    pub fn shifted(&self, positions: &[usize]) -> HsResult<Self> {
        if positions.len() < 2 {
            return Err(HeatsortError::Config(format!(
                "Shift needs at least 2 positions (got {})",
                positions.len()
            )));
        }
        for (i, &pos) in positions.iter().enumerate() {
            if pos >= self.len() {
                return Err(HeatsortError::OutOfRange {
                    index: pos,
                    len: self.len(),
                });
            }
            if positions[..i].contains(&pos) {
                return Err(HeatsortError::Config(format!(
                    "Shift position {} appears twice",
                    pos
                )));
            }
        }
        let mut p = self.clone();
        p.shift(positions);
        Ok(p)
    }

    fn shift(&mut self, positions: &[usize]) {
        let left_most = self.index[positions[0]];
        for pair in positions.windows(2) {
            self.index[pair[0]] = self.index[pair[1]];
        }
        self.index[positions[positions.len() - 1]] = left_most;
    }
}

impl<T: Clone> Permutation<T> {
    /// Grows the collection by one identity-mapped element. A backing still
    /// shared with other permutations is copied first.
    pub fn append(&mut self, item: T) {
        let next = self.index.len();
        Arc::make_mut(&mut self.backing).push(item);
        self.index.push(next);
    }
}

impl<T> FromIterator<T> for Permutation<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}
