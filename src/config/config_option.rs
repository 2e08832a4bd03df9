use crate::types::err::{self};

/// A named configuration option, bounded by a minimum and maximum value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if the value is within the bounds of the option.
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                Ok(())
            }
            false => Err(err::ConfigError::OutOfRange(self.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        let mut option = ConfigOption {
            name: "depth",
            min: 1_usize,
            max: 10,
            value: 5,
        };

        assert!(option.set(10).is_ok());
        assert_eq!(option.value, 10);

        assert_eq!(option.set(0), Err(err::ConfigError::OutOfRange("depth")));
        assert_eq!(option.value, 10);
    }
}
