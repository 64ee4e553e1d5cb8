//! A singleton cannot be mutated through the writable layer.

use capsets::prelude::*;

fn main() {
    let singleton: SingletonSet<i32> = SingletonSet::new(1);
    let _ = singleton.insert_values(vec![2]);
}
