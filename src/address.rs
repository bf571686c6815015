//! Destination address input model
//!
//! The state an address field carries: entered text, validation error,
//! focus, and the visual state the surrounding layout picks from.
//! Validation itself belongs to the engine; the model takes any predicate,
//! normally [`crate::engine::WalletEngine::validate_address`].

/// Visual state of the input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Idle,

    /// Focused or holding text
    Active,

    Error,
}

/// Address field state with an injected validator
pub struct AddressInput<F>
where
    F: Fn(&str) -> bool,
{
    validate: F,
    text: String,
    error: Option<String>,
    focused: bool,
}

impl<F> AddressInput<F>
where
    F: Fn(&str) -> bool,
{
    pub fn new(validate: F) -> Self {
        Self {
            validate,
            text: String::new(),
            error: None,
            focused: false,
        }
    }

    /// Replace the field's text (typing, paste, or a QR scan result)
    ///
    /// Clearing the field also clears the error; non-empty text is
    /// validated immediately.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if self.text.is_empty() || (self.validate)(&self.text) {
            self.error = None;
        } else {
            self.error = Some("Invalid address".to_string());
        }
    }

    pub fn clear(&mut self) {
        self.set_text("");
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The entered address, only when it validates
    pub fn address(&self) -> Option<&str> {
        if !self.text.is_empty() && (self.validate)(&self.text) {
            Some(&self.text)
        } else {
            None
        }
    }

    /// Whether the entered text fails validation
    ///
    /// An empty field is not invalid, just not submittable.
    pub fn is_invalid(&self) -> bool {
        if self.text.is_empty() {
            return false;
        }

        !(self.validate)(&self.text)
    }

    /// Which background and text treatment the field should use
    pub fn field_state(&self) -> FieldState {
        if self.error.is_some() {
            FieldState::Error
        } else if self.focused || !self.text.is_empty() {
            FieldState::Active
        } else {
            FieldState::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> AddressInput<impl Fn(&str) -> bool> {
        AddressInput::new(|addr: &str| addr.starts_with("Ds") && addr.len() >= 26)
    }

    #[test]
    fn test_empty_field() {
        let field = input();
        assert!(!field.is_invalid());
        assert!(field.error().is_none());
        assert!(field.address().is_none());
        assert_eq!(field.field_state(), FieldState::Idle);
    }

    #[test]
    fn test_invalid_text_sets_error() {
        let mut field = input();
        field.set_text("nonsense");

        assert!(field.is_invalid());
        assert_eq!(field.error(), Some("Invalid address"));
        assert!(field.address().is_none());
        assert_eq!(field.field_state(), FieldState::Error);
    }

    #[test]
    fn test_valid_text() {
        let mut field = input();
        field.set_text("DsUZxxoHJSty8DCfwfartwTYbuhmVduzhCu");

        assert!(!field.is_invalid());
        assert!(field.error().is_none());
        assert_eq!(
            field.address(),
            Some("DsUZxxoHJSty8DCfwfartwTYbuhmVduzhCu")
        );
        assert_eq!(field.field_state(), FieldState::Active);
    }

    #[test]
    fn test_clearing_resets_error() {
        let mut field = input();
        field.set_text("nonsense");
        assert_eq!(field.field_state(), FieldState::Error);

        field.clear();
        assert!(!field.is_invalid());
        assert!(field.error().is_none());
        assert_eq!(field.field_state(), FieldState::Idle);
    }

    #[test]
    fn test_focus_drives_active_state() {
        let mut field = input();
        field.set_focused(true);
        assert_eq!(field.field_state(), FieldState::Active);

        field.set_focused(false);
        assert_eq!(field.field_state(), FieldState::Idle);
    }
}
