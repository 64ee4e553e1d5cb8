//! A complement cannot be copied out member by member.

use capsets::prelude::*;

fn main() {
    let complement: NotSet<i32> = NotSet::of(ArraySet::from([1, 2]));
    let _ = complement.to_vec();
}
