use futures::stream::{self, Stream};
use std::time::Duration;

use crate::presentation::application::domain::typewriter::{Typewriter, TypewriterFrame};

/// Emits the first frame at once, then each following frame after the
/// previous frame's delay. Dropping the stream cancels the pending timer.
pub fn typewriter_frames(typewriter: Typewriter) -> impl Stream<Item = TypewriterFrame> {
    stream::unfold(
        (typewriter, None::<Duration>),
        |(mut typewriter, wait)| async move {
            if let Some(delay) = wait {
                tokio::time::sleep(delay).await;
            }
            let frame = typewriter.advance();
            let next_wait = Some(frame.delay);
            Some((frame, (typewriter, next_wait)))
        },
    )
}
