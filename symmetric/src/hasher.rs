use core::iter;

/// A hash function mapping a sequence of items to a fixed-size output.
pub trait CryptographicHasher<Item: Clone, Out>: Clone {
    fn hash_iter<I>(&self, input: I) -> Out
    where
        I: IntoIterator<Item = Item>;

    /// Hashes the concatenation of `input`. Implementations that can absorb whole slices should
    /// override this.
    fn hash_iter_slices<'a, I>(&self, input: I) -> Out
    where
        I: IntoIterator<Item = &'a [Item]>,
        Item: 'a,
    {
        self.hash_iter(input.into_iter().flat_map(|x| x.iter().cloned()))
    }

    fn hash_slice(&self, input: &[Item]) -> Out {
        self.hash_iter_slices(iter::once(input))
    }

    fn hash_item(&self, input: Item) -> Out {
        self.hash_slice(&[input])
    }
}
