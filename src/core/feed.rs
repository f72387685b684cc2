//! Confirmation feed - the external event stream boundary.
//!
//! The network client (external collaborator) pushes [`ConfirmationEvent`]
//! records into the sending half; the scene orchestrator drains the
//! receiving half once per tick, preserving arrival order. Field shapes
//! mirror the ledger websocket confirmation payload, so amounts arrive as
//! raw-unit decimal strings and may be malformed.

use crossbeam::channel::{Receiver, Sender, unbounded};
use serde::{Deserialize, Serialize};

/// Block subtype string that marks a transfer
pub const SUBTYPE_SEND: &str = "send";

/// One externally-sourced notification that a ledger transaction has been
/// observed and finalized. Consumed exactly once, then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationEvent {
    /// Recipient account identifier
    pub account: String,
    /// Transfer amount in raw units, decimal string as it arrives on the wire
    pub amount: String,
    /// Block subtype ("send" triggers rocket spawns)
    pub subtype: String,
    /// Sender / link account identifier
    pub link_as_account: String,
}

impl ConfirmationEvent {
    pub fn is_send(&self) -> bool {
        self.subtype == SUBTYPE_SEND
    }
}

/// Create a feed channel pair: the sender goes to the network client,
/// the receiver to the scene orchestrator.
pub fn feed_channel() -> (Sender<ConfirmationEvent>, Receiver<ConfirmationEvent>) {
    unbounded()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_preserves_arrival_order() {
        let (tx, rx) = feed_channel();
        for i in 0..5 {
            tx.send(ConfirmationEvent {
                account: format!("nano_{i}"),
                amount: "0".into(),
                subtype: SUBTYPE_SEND.into(),
                link_as_account: String::new(),
            })
            .unwrap();
        }
        for i in 0..5 {
            assert_eq!(rx.try_recv().unwrap().account, format!("nano_{i}"));
        }
    }

    #[test]
    fn test_is_send() {
        let mut ev = ConfirmationEvent {
            account: String::new(),
            amount: String::new(),
            subtype: SUBTYPE_SEND.into(),
            link_as_account: String::new(),
        };
        assert!(ev.is_send());
        ev.subtype = "receive".into();
        assert!(!ev.is_send());
    }
}
