//! Navigation-related state types.
//!
//! This module contains the enums identifying the two screens and the form
//! field currently receiving input on the calculator screen.

/// Specifying the two independent leaf screens.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Screen {
    Bmi,
    Catalog,
}

/// Specifying the calculator input fields.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BmiField {
    Weight,
    Height,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen() {
        assert_eq!(Screen::Bmi, Screen::Bmi);
        assert_eq!(Screen::Catalog, Screen::Catalog);
        assert_ne!(Screen::Bmi, Screen::Catalog);
    }

    #[test]
    fn test_bmi_field() {
        assert_eq!(BmiField::Weight, BmiField::Weight);
        assert_eq!(BmiField::Height, BmiField::Height);
        assert_ne!(BmiField::Weight, BmiField::Height);
    }
}
