//! Application module: the model behind the terminal front end.
//!
//! `App` owns the track being played and turns key presses into transport
//! calls; `PlaybackState` is the label derived from the track's flags.

mod model;

pub use model::*;
