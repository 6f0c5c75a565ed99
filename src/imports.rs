#[cfg(feature = "alloc")]
extern crate alloc;

macro_rules! import {
    ($root:ident) => {
        pub use $root::{
            boxed::Box,
            collections::{btree_map, btree_set, vec_deque, BTreeMap, BTreeSet, VecDeque},
            string::String,
            vec::Vec,
        };
    };
}

#[cfg(feature = "alloc")]
import!(alloc);
#[cfg(feature = "std")]
import!(std);

#[cfg(feature = "std")]
pub use std::collections::{hash_map, hash_set, HashMap, HashSet};
