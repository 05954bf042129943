//! Transient error/success banners.
//!
//! Each `show_*` call hands back a [`BannerTicket`]. Whoever runs the
//! auto-clear timer passes that ticket to [`Feedback::expire`]; a ticket that
//! was superseded by a newer message, or whose banner was already hidden,
//! clears nothing.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerKind {
    Error,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerTicket {
    kind: BannerKind,
    generation: u64,
}

impl BannerTicket {
    #[must_use]
    pub fn kind(&self) -> BannerKind {
        self.kind
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banner {
    message: Option<String>,
    generation: u64,
}

impl Banner {
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.message.is_some()
    }

    fn show(&mut self, message: String) -> u64 {
        self.generation += 1;
        self.message = Some(message);
        self.generation
    }

    fn hide(&mut self) {
        self.generation += 1;
        self.message = None;
    }

    fn expire(&mut self, generation: u64) -> bool {
        if self.generation != generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    error: Banner,
    success: Banner,
}

impl Feedback {
    #[must_use]
    pub fn error(&self) -> &Banner {
        &self.error
    }

    #[must_use]
    pub fn success(&self) -> &Banner {
        &self.success
    }

    /// Ticket for the banner of `kind` currently on screen.
    #[must_use]
    pub fn ticket(&self, kind: BannerKind) -> Option<BannerTicket> {
        let banner = match kind {
            BannerKind::Error => &self.error,
            BannerKind::Success => &self.success,
        };
        banner.is_shown().then_some(BannerTicket {
            kind,
            generation: banner.generation,
        })
    }

    /// Show an error, replacing any success message.
    pub fn show_error(&mut self, message: impl Into<String>) -> BannerTicket {
        self.success.hide();
        BannerTicket {
            kind: BannerKind::Error,
            generation: self.error.show(message.into()),
        }
    }

    /// Show a success message, replacing any error.
    pub fn show_success(&mut self, message: impl Into<String>) -> BannerTicket {
        self.error.hide();
        BannerTicket {
            kind: BannerKind::Success,
            generation: self.success.show(message.into()),
        }
    }

    /// Clear the banner the ticket was issued for, if it is still the one on
    /// screen. Returns whether anything was cleared.
    pub fn expire(&mut self, ticket: BannerTicket) -> bool {
        match ticket.kind {
            BannerKind::Error => self.error.expire(ticket.generation),
            BannerKind::Success => self.success.expire(ticket.generation),
        }
    }

    /// Hide the error banner; its outstanding ticket becomes a no-op.
    pub fn clear_error(&mut self) {
        self.error.hide();
    }
}
