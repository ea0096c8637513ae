//! Navigation chrome components
//!
//! The slide-out mobile panel and the small controls around it. Styling
//! comes from the host stylesheet, which reads the color tokens as CSS
//! custom properties.

mod brand;
mod button;
mod mobile_nav;

pub use brand::*;
pub use button::*;
pub use mobile_nav::*;
