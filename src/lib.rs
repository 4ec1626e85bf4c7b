/*!
cutroll
========

**cutroll** is the coordination layer behind an interactive "cut-and-roll"
slicing mechanic: a tool sweeps through a target body, an external splitting
collaborator partitions the body along the cutting plane, and every resulting
piece animates a peel/roll deformation whose intensity depends on the piece's
thickness.

The crate owns no geometry processing, rendering, or physics. It owns the
*slice session*: registration of pieces in creation order, derivation of
rolling parameters through a configurable response curve, the non-overtaking
constraint that keeps thin pieces from rolling through the thicker piece they
were cut from, and the propagation of the deepest reached cut-depth to every
piece of the session.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]

pub extern crate nalgebra as na;

pub mod curve;
pub mod interop;
pub mod math;
pub mod session;
