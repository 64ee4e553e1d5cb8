//! A complement has no finite size, so it cannot report emptiness.

use capsets::prelude::*;

fn main() {
    let complement: NotSet<i32> = NotSet::of(ArraySet::from([1, 2]));
    let _ = complement.is_empty();
}
