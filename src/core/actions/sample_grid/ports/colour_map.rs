use crate::core::data::colour::Hsl;

pub trait ColourMap<T> {
    fn map(&self, value: T) -> Hsl;
}
