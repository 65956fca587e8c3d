use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a binary search tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Delete the value from the data structure
    Delete(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Delete(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
