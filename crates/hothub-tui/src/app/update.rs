use std::time::Instant;

use hothub_core::{GateView, OfferSurface, Route};

use super::{App, InputMode, PURCHASE_ROTATE_TICKS, SPLASH_DURATION};
use crate::action::Action;
use crate::view::notification::PURCHASES;

impl App {
    /// Process an action and update state. Returns true if the app should quit.
    pub fn update(&mut self, action: Action) -> bool {
        // Help overlay intercepts everything except quit and time.
        if self.show_help {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::Tick => self.advance_tick(),
                Action::None | Action::Resize(..) => {}
                _ => self.show_help = false,
            }
            return false;
        }

        // The gate's views come before anything routed.
        match self.gate.view(self.splash_done) {
            GateView::Splash => {
                match action {
                    Action::Quit => {
                        self.should_quit = true;
                        return true;
                    }
                    Action::Tick => {
                        self.advance_tick();
                        // Auto-complete after the fixed intro.
                        if self.splash_start.elapsed() >= SPLASH_DURATION {
                            self.finish_splash();
                        }
                    }
                    Action::None | Action::Resize(..) => {}
                    // Any other key skips the intro.
                    _ => self.finish_splash(),
                }
                return false;
            }
            GateView::AccessDenied => {
                // Terminal screen: nothing to do here but leave.
                match action {
                    Action::Quit => {
                        self.should_quit = true;
                        return true;
                    }
                    Action::Tick => self.advance_tick(),
                    _ => {}
                }
                return false;
            }
            GateView::VerificationPrompt => {
                match action {
                    Action::Quit => {
                        self.should_quit = true;
                        return true;
                    }
                    Action::Grant | Action::DrillIn => {
                        self.gate.grant();
                        self.push_toast("Welcome to HotHub");
                        self.maybe_mount_routes();
                    }
                    Action::Deny => {
                        self.gate.deny();
                    }
                    Action::Tick => self.advance_tick(),
                    _ => {}
                }
                return false;
            }
            GateView::Application => {}
        }

        // Address-line entry mode intercepts keystrokes.
        if self.input_mode == InputMode::PathEntry {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::PathCancel => {
                    self.input_mode = InputMode::Normal;
                    self.path_buffer.clear();
                }
                Action::PathConfirm => {
                    let raw = self.path_buffer.trim().to_string();
                    self.input_mode = InputMode::Normal;
                    self.path_buffer.clear();
                    if !raw.is_empty() {
                        self.navigate(Route::parse(&raw));
                    }
                }
                Action::PathInput(ch) => {
                    if ch == '\x08' {
                        self.path_buffer.pop();
                    } else {
                        self.path_buffer.push(ch);
                    }
                }
                Action::Tick => self.advance_tick(),
                _ => {}
            }
            return false;
        }

        // Offer overlay intercept — close it before anything else reacts.
        if self.offer.surface(&self.route) == OfferSurface::Overlay {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::CloseOffer | Action::NavigateBack | Action::DrillIn => {
                    self.offer.close();
                }
                Action::Tick => self.advance_tick(),
                _ => {}
            }
            return false;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
                return true;
            }
            Action::Tick => self.advance_tick(),
            Action::ToggleHelp => self.show_help = true,
            Action::MoveDown => {
                if self.route == Route::Home && !self.catalog.is_empty() {
                    self.home_cursor = (self.home_cursor + 1).min(self.catalog.len() - 1);
                }
            }
            Action::MoveUp => {
                if self.route == Route::Home {
                    self.home_cursor = self.home_cursor.saturating_sub(1);
                }
            }
            Action::DrillIn => {
                if self.route == Route::Home
                    && let Some(video) = self.catalog.get(self.home_cursor)
                {
                    let id = video.id.clone();
                    self.navigate(Route::Video(id));
                }
            }
            Action::NavigateBack => {
                if self.route != Route::Home {
                    self.navigate(Route::Home);
                }
            }
            Action::GoHome => self.navigate(Route::Home),
            Action::GoAdmin => self.navigate(Route::Admin),
            Action::OpenOffer => {
                // Only honored while the trigger is showing.
                if self.offer.surface(&self.route) == OfferSurface::Trigger {
                    self.offer.open();
                }
            }
            Action::StartPathEntry => {
                self.input_mode = InputMode::PathEntry;
                self.path_buffer = "/".to_string();
            }
            Action::ClickAt(x, y) => {
                if let Some(area) = self.last_trigger_area
                    && x >= area.x
                    && x < area.x + area.width
                    && y >= area.y
                    && y < area.y + area.height
                    && self.offer.surface(&self.route) == OfferSurface::Trigger
                {
                    self.offer.open();
                }
            }
            Action::CloseOffer
            | Action::Grant
            | Action::Deny
            | Action::PathInput(_)
            | Action::PathCancel
            | Action::PathConfirm
            | Action::Resize(..)
            | Action::None => {}
        }
        false
    }

    fn advance_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        if self.routes_mounted {
            // Offer auto-show deadline.
            if self.offer.poll(Instant::now()) {
                tracing::debug!("offer popup auto-shown");
            }

            // Rotate the purchase ticker.
            if self.tick.wrapping_sub(self.purchase_change_tick) >= PURCHASE_ROTATE_TICKS {
                self.purchase_index = (self.purchase_index + 1) % PURCHASES.len();
                self.purchase_change_tick = self.tick;
            }
        }

        // Expire the transient toast.
        if self.toast.as_ref().is_some_and(|(_, e)| self.tick >= *e) {
            self.toast = None;
        }
    }
}
