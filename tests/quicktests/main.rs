//! Property tests of the public `Tree` API against a sorted `Vec` model.

mod linked;
