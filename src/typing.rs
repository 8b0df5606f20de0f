//! Hero headline typing effect.
//!
//! The cycler only consumes frames while the hero is at least half on screen.
//! Leaving the hero cancels the pending frame outright rather than letting a
//! stale tick notice on its own.

use std::cell::RefCell;
use std::rc::Rc;

use motion::config::TypingConfig;
use motion::typing::FrameRequest;
use web_sys::Document;

use crate::dom;
use crate::error::PageError;
use crate::frame::FrameLoop;

pub const TEXT_ID: &str = "typed-text";
pub const HERO_ID: &str = "hero";

pub fn install(document: &Document, config: &TypingConfig) -> Result<(), PageError> {
    let (Some(text), Some(hero)) = (document.get_element_by_id(TEXT_ID), document.get_element_by_id(HERO_ID)) else {
        log::debug!("typing: #{TEXT_ID} or #{HERO_ID} missing, typing disabled");
        return Ok(());
    };

    let cycler = config.cycler()?;
    // Markup may carry placeholder text; typing starts from an empty line.
    text.set_text_content(Some(cycler.text()));
    let cycler = Rc::new(RefCell::new(cycler));
    let frames = {
        let cycler = Rc::clone(&cycler);
        FrameLoop::new(move |timestamp| {
            let mut cycler = cycler.borrow_mut();
            let tick = cycler.tick(timestamp);
            if tick.text_changed {
                text.set_text_content(Some(cycler.text()));
            }
            tick.reschedule
        })
    };

    dom::observe(&[hero], config.threshold, move |batch, _| {
        for transition in batch {
            let mut cycler = cycler.borrow_mut();
            let request = cycler.on_visibility_change(transition.visibility);
            log::debug!(
                "typing: {:?} while {}, {:?} at phrase {} char {}",
                request,
                if cycler.is_observing() { "visible" } else { "hidden" },
                cycler.phase(),
                cycler.state().phrase_index,
                cycler.state().char_index,
            );
            let result = match request {
                FrameRequest::Start => frames.request(),
                FrameRequest::Stop => frames.cancel(),
                FrameRequest::Unchanged => Ok(()),
            };
            if let Err(err) = result {
                log::warn!("typing: {err}");
            }
        }
    })?;
    Ok(())
}
