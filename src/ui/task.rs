//! Embassy UI loop for the frequencies screen.
//!
//! The touch driver task resolves each tap to a widget identity and sends
//! it down a [`TouchChannel`]. This loop feeds identities to the screen one
//! at a time, so a handler always runs to completion (including a blocking
//! EEPROM write) before the next touch is looked at.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, Receiver};

use super::frequencies::FrequenciesScreen;
use super::{Navigation, WidgetId};
use crate::config::TOUCH_QUEUE_DEPTH;
use crate::frequency::FrequencyManager;

/// Queue of widget identities from the touch driver.
pub type TouchChannel<M> = Channel<M, WidgetId, TOUCH_QUEUE_DEPTH>;

/// Receiving end of a [`TouchChannel`].
pub type TouchReceiver<'ch, M> = Receiver<'ch, M, WidgetId, TOUCH_QUEUE_DEPTH>;

/// Run the screen until the user leaves it.
///
/// Returns where to go next. Bad identities are logged by the screen and
/// skipped.
pub async fn run<RM, M>(
    screen: &mut FrequenciesScreen<M>,
    touches: TouchReceiver<'_, RM>,
) -> Navigation
where
    RM: RawMutex,
    M: FrequencyManager,
{
    info!("Frequencies screen active");
    loop {
        let id = touches.receive().await;
        trace!("Touch: {}", id);
        match screen.on_click(id) {
            Ok(Navigation::Stay) | Err(_) => {}
            Ok(nav) => return nav,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ID_DEFAULTS, ID_DONE, ID_FREQBTN_START, ID_STORE};
    use crate::frequency::{BandTable, Volatile};
    use crate::ui::feedback::Feedback;
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[test]
    fn runs_until_done() {
        let channel = TouchChannel::<NoopRawMutex>::new();
        let mut screen = FrequenciesScreen::new(BandTable::new(Volatile)).unwrap();

        channel.try_send(WidgetId(ID_FREQBTN_START + 3)).unwrap();
        channel.try_send(WidgetId(ID_DEFAULTS)).unwrap();
        channel.try_send(WidgetId(ID_DONE)).unwrap();

        let nav = block_on(run(&mut screen, channel.receiver()));
        assert_eq!(nav, Navigation::MainScreen);
        assert_eq!(screen.feedback(), Feedback::Normal);
        assert_eq!(screen.manager().selected_band(), 3);
    }

    #[test]
    fn bad_identity_does_not_stop_loop() {
        let channel = TouchChannel::<NoopRawMutex>::new();
        let mut screen = FrequenciesScreen::new(BandTable::new(Volatile)).unwrap();

        channel.try_send(WidgetId(ID_FREQBTN_START + 99)).unwrap();
        channel.try_send(WidgetId(ID_STORE)).unwrap();
        channel.try_send(WidgetId(ID_DONE)).unwrap();

        let nav = block_on(run(&mut screen, channel.receiver()));
        assert_eq!(nav, Navigation::MainScreen);
        assert!(!screen.manager().is_dirty());
    }
}
