pub mod util;

#[cfg(test)]
mod geometry;
#[cfg(test)]
mod hull;
#[cfg(test)]
mod regression;
