use crate::bmi;
use crate::catalog::{self, Product};
use log::*;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use super::navigation::{BmiField, Screen};
use super::StateError;

/// Easing factor applied to the displayed value and progress bar on every
/// tick. Purely cosmetic; the committed reading is never interpolated.
///
const ANIMATION_EASING: f64 = 0.2;

/// Distance under which an animated display value snaps to its target.
///
const ANIMATION_SNAP: f64 = 0.005;

/// Maximum number of characters accepted per calculator input field.
///
const INPUT_FIELD_LIMIT: usize = 8;

/// Maximum number of captured log lines kept for the debug overlay.
///
const DEBUG_ENTRY_LIMIT: usize = 200;

/// Houses data representative of application state.
///
/// All transitions are synchronous methods invoked from the terminal event
/// handler; no other code mutates this struct.
pub struct State {
    screen: Screen,
    terminal_size: Rect,
    // Calculator form
    weight_input: String,
    height_input: String,
    active_field: BmiField,
    reading: bmi::Reading,
    displayed_value: f64,
    displayed_progress: f64,
    // Catalog and selection
    products: Vec<Product>,
    products_list_state: ListState,
    selected_product: Option<Product>,
    detail_visible: bool,
    // Debug overlay
    debug_mode: bool,
    debug_entries: Vec<String>,
    theme: crate::ui::Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        let products = catalog::catalog();
        let mut products_list_state = ListState::default();
        if !products.is_empty() {
            products_list_state.select(Some(0));
        }
        State {
            screen: Screen::Bmi,
            terminal_size: Rect::default(),
            weight_input: String::new(),
            height_input: String::new(),
            active_field: BmiField::Weight,
            reading: bmi::Reading::default(),
            displayed_value: 0.0,
            displayed_progress: 0.0,
            products,
            products_list_state,
            selected_product: None,
            detail_visible: false,
            debug_mode: false,
            debug_entries: vec![],
            theme: crate::ui::Theme::default(),
        }
    }
}

impl State {
    pub fn new(theme: crate::ui::Theme, screen: Screen) -> Self {
        State {
            theme,
            screen,
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &crate::ui::Theme {
        &self.theme
    }

    /// Sets the terminal size.
    ///
    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    /// Return the current screen.
    ///
    pub fn current_screen(&self) -> &Screen {
        &self.screen
    }

    /// Activate the other screen. Ignored while the detail overlay is open so
    /// the selection machine never changes screens mid-interaction.
    ///
    pub fn next_screen(&mut self) -> &mut Self {
        if self.detail_visible {
            return self;
        }
        self.screen = match self.screen {
            Screen::Bmi => Screen::Catalog,
            Screen::Catalog => Screen::Bmi,
        };
        debug!("Switched to screen {:?}.", self.screen);
        self
    }

    // Calculator form

    /// Return the active calculator field.
    ///
    pub fn active_field(&self) -> &BmiField {
        &self.active_field
    }

    /// Activate the next calculator field.
    ///
    pub fn next_field(&mut self) -> &mut Self {
        self.active_field = match self.active_field {
            BmiField::Weight => BmiField::Height,
            BmiField::Height => BmiField::Weight,
        };
        self
    }

    /// Activate the previous calculator field.
    ///
    pub fn previous_field(&mut self) -> &mut Self {
        // Two fields only, so previous and next coincide
        self.next_field()
    }

    /// Return the weight input text.
    ///
    pub fn get_weight_input(&self) -> &str {
        &self.weight_input
    }

    /// Return the height input text.
    ///
    pub fn get_height_input(&self) -> &str {
        &self.height_input
    }

    /// Append a character to the active input field. Only digits and the two
    /// decimal separators are accepted; anything else is dropped.
    ///
    pub fn add_input_char(&mut self, c: char) -> &mut Self {
        if !c.is_ascii_digit() && c != ',' && c != '.' {
            return self;
        }
        let field = match self.active_field {
            BmiField::Weight => &mut self.weight_input,
            BmiField::Height => &mut self.height_input,
        };
        if field.len() < INPUT_FIELD_LIMIT {
            field.push(c);
        }
        self
    }

    /// Remove the last character from the active input field.
    ///
    pub fn backspace_input(&mut self) -> &mut Self {
        match self.active_field {
            BmiField::Weight => self.weight_input.pop(),
            BmiField::Height => self.height_input.pop(),
        };
        self
    }

    /// Compute a reading from the current inputs and commit it. The displayed
    /// value restarts from zero so the count-up animation replays.
    ///
    pub fn calculate(&mut self) -> &mut Self {
        self.reading = bmi::compute(&self.weight_input, &self.height_input);
        self.displayed_value = 0.0;
        match self.reading.value {
            Some(value) => debug!("Computed IMC {} from current inputs.", value),
            None => debug!("Rejected invalid calculator inputs."),
        }
        self
    }

    /// Clear the calculator back to its initial empty state. Idempotent.
    ///
    pub fn reset_form(&mut self) -> &mut Self {
        self.weight_input.clear();
        self.height_input.clear();
        self.active_field = BmiField::Weight;
        self.reading = bmi::Reading::default();
        self.displayed_value = 0.0;
        self
    }

    /// Return the committed reading.
    ///
    pub fn get_reading(&self) -> &bmi::Reading {
        &self.reading
    }

    /// Return the animated display value for the reading.
    ///
    pub fn displayed_value(&self) -> f64 {
        self.displayed_value
    }

    /// Return the animated progress-bar fraction, always within `[0, 1]`.
    ///
    pub fn displayed_progress(&self) -> f64 {
        self.displayed_progress
    }

    /// Advance the cosmetic animations one tick toward the committed reading.
    /// A new calculation simply retargets the easing; stale in-flight motion
    /// never affects the committed values.
    ///
    pub fn advance_animations(&mut self) -> &mut Self {
        let value_target = self.reading.value.unwrap_or(0.0);
        let progress_target = bmi::progress_fraction(self.reading.value);
        self.displayed_value = ease_toward(self.displayed_value, value_target);
        self.displayed_progress = ease_toward(self.displayed_progress, progress_target);
        self
    }

    // Catalog and selection

    /// Return the catalog products.
    ///
    pub fn get_products(&self) -> &[Product] {
        &self.products
    }

    /// Return the products list state.
    ///
    pub fn get_products_list_state(&mut self) -> &mut ListState {
        &mut self.products_list_state
    }

    /// Activate the next product card.
    ///
    pub fn next_product(&mut self) -> &mut Self {
        if self.products.is_empty() {
            self.products_list_state.select(None);
            return self;
        }
        let current = self.products_list_state.selected().unwrap_or(0);
        let next = if current + 1 < self.products.len() {
            current + 1
        } else {
            0
        };
        self.products_list_state.select(Some(next));
        self
    }

    /// Activate the previous product card.
    ///
    pub fn previous_product(&mut self) -> &mut Self {
        if self.products.is_empty() {
            self.products_list_state.select(None);
            return self;
        }
        let current = self.products_list_state.selected().unwrap_or(0);
        let prev = if current > 0 {
            current - 1
        } else {
            self.products.len() - 1
        };
        self.products_list_state.select(Some(prev));
        self
    }

    /// Open the detail overlay for the currently highlighted product.
    ///
    pub fn open_selected_details(&mut self) -> &mut Self {
        if let Some(index) = self.products_list_state.selected() {
            if let Some(product) = self.products.get(index) {
                let product = product.to_owned();
                return self.open_details(product);
            }
        }
        self
    }

    /// Open the detail overlay for the given product. Selection and overlay
    /// visibility are always set together.
    ///
    pub fn open_details(&mut self, product: Product) -> &mut Self {
        debug!("Opening details for product '{}'.", product.id);
        self.selected_product = Some(product);
        self.detail_visible = true;
        self
    }

    /// Open the detail overlay for the product with the given id, or return
    /// an error if the catalog holds no such product.
    ///
    pub fn open_details_by_id(&mut self, id: &str) -> Result<&mut Self, StateError> {
        let product = self
            .products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StateError::ProductNotFound { id: id.to_string() })?
            .to_owned();
        Ok(self.open_details(product))
    }

    /// Close the detail overlay. Selection and overlay visibility are always
    /// cleared together.
    ///
    pub fn close_details(&mut self) -> &mut Self {
        self.selected_product = None;
        self.detail_visible = false;
        self
    }

    /// Complete the buy interaction for the open product and close the
    /// overlay. No external side effect beyond a log line.
    ///
    pub fn confirm_purchase(&mut self) -> &mut Self {
        if let Some(product) = &self.selected_product {
            info!("Purchase confirmed for '{}'.", product.title);
        }
        self.close_details()
    }

    /// Return the product shown in the detail overlay, if any.
    ///
    pub fn get_selected_product(&self) -> Option<&Product> {
        self.selected_product.as_ref()
    }

    /// Return whether the detail overlay is open.
    ///
    pub fn is_detail_visible(&self) -> bool {
        self.detail_visible
    }

    // Debug overlay

    /// Return whether the debug overlay is shown.
    ///
    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Toggle the debug overlay.
    ///
    pub fn toggle_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = !self.debug_mode;
        self
    }

    /// Hide the debug overlay.
    ///
    pub fn exit_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = false;
        self
    }

    /// Append a captured log line, dropping the oldest past the limit.
    ///
    pub fn push_debug_entry(&mut self, entry: String) -> &mut Self {
        self.debug_entries.push(entry);
        if self.debug_entries.len() > DEBUG_ENTRY_LIMIT {
            self.debug_entries.remove(0);
        }
        self
    }

    /// Return the captured log lines.
    ///
    pub fn get_debug_entries(&self) -> &[String] {
        &self.debug_entries
    }
}

/// Move a display value one easing step toward its target, snapping when
/// close enough.
///
fn ease_toward(current: f64, target: f64) -> f64 {
    let next = current + (target - current) * ANIMATION_EASING;
    if (target - next).abs() < ANIMATION_SNAP {
        target
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::Category;
    use fake::{Fake, Faker};

    #[test]
    fn default_state_is_browsing_with_empty_form() {
        let state = State::default();
        assert_eq!(*state.current_screen(), Screen::Bmi);
        assert_eq!(*state.active_field(), BmiField::Weight);
        assert!(state.get_weight_input().is_empty());
        assert!(state.get_height_input().is_empty());
        assert!(state.get_reading().is_empty());
        assert!(state.get_selected_product().is_none());
        assert!(!state.is_detail_visible());
    }

    #[test]
    fn add_input_char_routes_to_active_field() {
        let mut state = State::default();
        state.add_input_char('7').add_input_char('2');
        state.next_field();
        state.add_input_char('1').add_input_char('7').add_input_char('5');
        assert_eq!(state.get_weight_input(), "72");
        assert_eq!(state.get_height_input(), "175");
    }

    #[test]
    fn add_input_char_accepts_decimal_separators_only() {
        let mut state = State::default();
        state
            .add_input_char('7')
            .add_input_char(',')
            .add_input_char('5')
            .add_input_char('x')
            .add_input_char(' ');
        assert_eq!(state.get_weight_input(), "7,5");
    }

    #[test]
    fn add_input_char_caps_field_length() {
        let mut state = State::default();
        for _ in 0..20 {
            state.add_input_char('9');
        }
        assert_eq!(state.get_weight_input().len(), INPUT_FIELD_LIMIT);
    }

    #[test]
    fn backspace_input_removes_from_active_field() {
        let mut state = State::default();
        state.add_input_char('7').add_input_char('2');
        state.backspace_input();
        assert_eq!(state.get_weight_input(), "7");
        state.backspace_input().backspace_input();
        assert_eq!(state.get_weight_input(), "");
    }

    #[test]
    fn field_navigation_cycles() {
        let mut state = State::default();
        state.next_field();
        assert_eq!(*state.active_field(), BmiField::Height);
        state.next_field();
        assert_eq!(*state.active_field(), BmiField::Weight);
        state.previous_field();
        assert_eq!(*state.active_field(), BmiField::Height);
    }

    #[test]
    fn calculate_commits_a_classified_reading() {
        let mut state = State::default();
        state.add_input_char('7').add_input_char('2');
        state.next_field();
        state.add_input_char('1').add_input_char('7').add_input_char('5');
        state.calculate();
        assert_eq!(state.get_reading().value, Some(23.51));
        assert_eq!(state.get_reading().category, Some(Category::Normal));
        assert_eq!(state.get_reading().message, None);
    }

    #[test]
    fn calculate_with_invalid_inputs_sets_message_only() {
        let mut state = State::default();
        state.calculate();
        assert_eq!(state.get_reading().value, None);
        assert_eq!(state.get_reading().category, None);
        assert!(state.get_reading().message.is_some());
    }

    #[test]
    fn calculate_restarts_displayed_value() {
        let mut state = State::default();
        state.add_input_char('7').add_input_char('2');
        state.next_field();
        state.add_input_char('1').add_input_char('7').add_input_char('5');
        state.calculate();
        for _ in 0..10 {
            state.advance_animations();
        }
        assert!(state.displayed_value() > 0.0);
        state.calculate();
        assert_eq!(state.displayed_value(), 0.0);
    }

    #[test]
    fn reset_form_restores_initial_state() {
        let mut state = State::default();
        state.add_input_char('7').add_input_char('2');
        state.next_field();
        state.add_input_char('1').add_input_char('7').add_input_char('5');
        state.calculate();
        state.reset_form();
        assert!(state.get_weight_input().is_empty());
        assert!(state.get_height_input().is_empty());
        assert_eq!(*state.active_field(), BmiField::Weight);
        assert!(state.get_reading().is_empty());
    }

    #[test]
    fn reset_form_is_idempotent() {
        let mut state = State::default();
        state.add_input_char('5');
        state.reset_form();
        let weight = state.get_weight_input().to_string();
        let reading = state.get_reading().clone();
        state.reset_form();
        assert_eq!(state.get_weight_input(), weight);
        assert_eq!(*state.get_reading(), reading);
    }

    #[test]
    fn animations_converge_on_committed_reading() {
        let mut state = State::default();
        state.add_input_char('7').add_input_char('2');
        state.next_field();
        state.add_input_char('1').add_input_char('7').add_input_char('5');
        state.calculate();
        for _ in 0..200 {
            state.advance_animations();
            let progress = state.displayed_progress();
            assert!((0.0..=1.0).contains(&progress));
        }
        assert_eq!(state.displayed_value(), 23.51);
        assert_eq!(
            state.displayed_progress(),
            bmi::progress_fraction(Some(23.51))
        );
    }

    #[test]
    fn animations_ease_back_after_reset() {
        let mut state = State::default();
        state.add_input_char('7').add_input_char('2');
        state.next_field();
        state.add_input_char('1').add_input_char('7').add_input_char('5');
        state.calculate();
        for _ in 0..200 {
            state.advance_animations();
        }
        state.reset_form();
        for _ in 0..200 {
            state.advance_animations();
        }
        assert_eq!(state.displayed_value(), 0.0);
        assert_eq!(state.displayed_progress(), 0.0);
    }

    #[test]
    fn open_selected_details_sets_selection_and_overlay_together() {
        let mut state = State::default();
        state.open_selected_details();
        assert!(state.is_detail_visible());
        let selected = state.get_selected_product().unwrap();
        assert_eq!(selected.id, state.get_products()[0].id);
    }

    #[test]
    fn open_details_holds_the_given_product() {
        let mut state = State::default();
        let product: Product = Faker.fake();
        state.open_details(product.to_owned());
        assert!(state.is_detail_visible());
        assert_eq!(*state.get_selected_product().unwrap(), product);
    }

    #[test]
    fn open_details_by_id_finds_catalog_products() {
        let mut state = State::default();
        let id = state.get_products()[2].id.to_owned();
        state.open_details_by_id(&id).unwrap();
        assert!(state.is_detail_visible());
        assert_eq!(state.get_selected_product().unwrap().id, id);
    }

    #[test]
    fn open_details_by_id_rejects_unknown_ids() {
        let mut state = State::default();
        let result = state.open_details_by_id("no-such-product");
        assert!(matches!(
            result,
            Err(StateError::ProductNotFound { .. })
        ));
        assert!(!state.is_detail_visible());
        assert!(state.get_selected_product().is_none());
    }

    #[test]
    fn close_details_clears_selection_and_overlay_together() {
        let mut state = State::default();
        for index in 0..state.get_products().len() {
            let product = state.get_products()[index].to_owned();
            state.open_details(product);
            state.close_details();
            assert!(!state.is_detail_visible());
            assert!(state.get_selected_product().is_none());
        }
    }

    #[test]
    fn confirm_purchase_completes_and_closes() {
        let mut state = State::default();
        state.open_selected_details();
        state.confirm_purchase();
        assert!(!state.is_detail_visible());
        assert!(state.get_selected_product().is_none());
    }

    #[test]
    fn product_navigation_wraps_both_ways() {
        let mut state = State::default();
        let count = state.get_products().len();
        for _ in 0..count {
            state.next_product();
        }
        assert_eq!(state.get_products_list_state().selected(), Some(0));
        state.previous_product();
        assert_eq!(state.get_products_list_state().selected(), Some(count - 1));
    }

    #[test]
    fn next_screen_toggles_between_the_two_screens() {
        let mut state = State::default();
        state.next_screen();
        assert_eq!(*state.current_screen(), Screen::Catalog);
        state.next_screen();
        assert_eq!(*state.current_screen(), Screen::Bmi);
    }

    #[test]
    fn next_screen_is_blocked_while_detail_is_open() {
        let mut state = State::default();
        state.next_screen();
        state.open_selected_details();
        state.next_screen();
        assert_eq!(*state.current_screen(), Screen::Catalog);
        state.close_details();
        state.next_screen();
        assert_eq!(*state.current_screen(), Screen::Bmi);
    }

    #[test]
    fn push_debug_entry_caps_history() {
        let mut state = State::default();
        for i in 0..(DEBUG_ENTRY_LIMIT + 10) {
            state.push_debug_entry(format!("entry {}", i));
        }
        assert_eq!(state.get_debug_entries().len(), DEBUG_ENTRY_LIMIT);
        assert_eq!(state.get_debug_entries()[0], "entry 10");
    }

    #[test]
    fn toggle_debug_mode() {
        let mut state = State::default();
        state.toggle_debug_mode();
        assert!(state.is_debug_mode());
        state.exit_debug_mode();
        assert!(!state.is_debug_mode());
    }
}
