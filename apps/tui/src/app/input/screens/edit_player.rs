use crate::app::input::helpers::wrap_increment;
use crate::app::state::{App, FormField};
use crossterm::event::KeyCode;
use roster_radar::domain::MAX_RATING;

pub async fn handle_edit_player_input(app: &mut App, key: KeyCode) -> color_eyre::Result<()> {
    match key {
        KeyCode::Esc => {
            app.close_form();
            return Ok(());
        }
        KeyCode::Enter => return app.submit_form().await,
        _ => {}
    }

    let Some(form) = app.form.as_mut() else {
        return Ok(());
    };

    match key {
        KeyCode::Up | KeyCode::BackTab => form.field = form.field.prev(),
        KeyCode::Down | KeyCode::Tab => form.field = form.field.next(),
        _ => match form.field {
            FormField::Name => match key {
                KeyCode::Backspace => form.pop_name_char(),
                KeyCode::Char(ch) => form.push_name_char(ch),
                _ => {}
            },
            FormField::Position => match key {
                KeyCode::Left => form.cycle_position(false),
                KeyCode::Right | KeyCode::Char(' ') => form.cycle_position(true),
                _ => {}
            },
            FormField::Rating(attribute) => match key {
                KeyCode::Left => form.step_rating(attribute, false),
                KeyCode::Right => form.step_rating(attribute, true),
                KeyCode::Char(' ') => {
                    let current = attribute.get(&form.draft);
                    form.set_rating(attribute, cycle_rating(current));
                }
                KeyCode::Char(ch) => {
                    if let Some(rating) = ch.to_digit(10).and_then(|d| u8::try_from(d).ok()) {
                        if (1..=MAX_RATING).contains(&rating) {
                            form.set_rating(attribute, rating);
                            form.field = form.field.next();
                        }
                    }
                }
                _ => {}
            },
        },
    }

    Ok(())
}

/// Next rating in 1..=5, wrapping back to 1; unrated starts at 1
fn cycle_rating(current: u8) -> u8 {
    if current == 0 {
        return 1;
    }
    let next = wrap_increment(usize::from(current) - 1, usize::from(MAX_RATING));
    u8::try_from(next + 1).unwrap_or(1)
}
