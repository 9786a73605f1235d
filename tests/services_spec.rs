use assignment::models::*;
use assignment::services::*;
use speculate2::speculate;

speculate! {
    describe "status messages" {
        before {
            let messages = StatusMessages::new();
        }

        it "drains in insertion order" {
            messages.add_status("one");
            messages.add_error("two");
            messages.add_message(MessageKind::Warning, "three");

            let drained: Vec<_> = messages.drain().into_iter().map(|m| (m.kind, m.text)).collect();
            assert_eq!(drained, vec![
                (MessageKind::Status, "one".to_string()),
                (MessageKind::Error, "two".to_string()),
                (MessageKind::Warning, "three".to_string()),
            ]);
        }

        it "is empty after draining" {
            messages.add_status("one");
            messages.drain();
            assert!(messages.is_empty());
            assert!(messages.drain().is_empty());
        }

        it "keeps one copy of a repeated message" {
            messages.add_status("Name: Alice");
            messages.add_status("Name: Alice");
            assert_eq!(messages.drain().len(), 1);
        }

        it "keeps the same text under different kinds" {
            messages.add_status("same");
            messages.add_error("same");
            assert_eq!(messages.drain().len(), 2);
        }
    }

    describe "recent log" {
        it "assigns increasing ids starting at one" {
            let log = RecentLog::new(10);
            log.info("assignment", "first");
            log.info("assignment", "second");

            let records = log.recent(None);
            assert_eq!(records[0].id, 2);
            assert_eq!(records[1].id, 1);
        }

        it "returns newest first and honours the limit" {
            let log = RecentLog::new(10);
            log.info("assignment", "a");
            log.info("assignment", "b");
            log.info("assignment", "c");

            let messages: Vec<_> = log.recent(Some(2)).into_iter().map(|r| r.message).collect();
            assert_eq!(messages, vec!["c", "b"]);
        }

        it "evicts the oldest record when full" {
            let log = RecentLog::new(2);
            log.info("assignment", "a");
            log.info("assignment", "b");
            log.info("assignment", "c");

            let messages: Vec<_> = log.recent(None).into_iter().map(|r| r.message).collect();
            assert_eq!(messages, vec!["c", "b"]);
            assert_eq!(log.len(), 2);
        }

        it "reports its capacity" {
            assert_eq!(RecentLog::new(7).capacity(), 7);
        }

        it "keeps nothing with zero capacity" {
            let log = RecentLog::new(0);
            log.info("assignment", "a");
            assert!(log.is_empty());
        }

        it "filters by channel" {
            let log = RecentLog::new(10);
            log.info("assignment", "mine");
            log.log("system", Severity::Warning, "other");

            let records = log.by_channel("assignment");
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].message, "mine");
        }

        it "shares records between clones" {
            let log = RecentLog::new(10);
            let clone = log.clone();
            clone.info("assignment", "shared");
            assert_eq!(log.len(), 1);
        }

        it "records the given severity" {
            let log = RecentLog::new(10);
            log.log("assignment", Severity::Error, "broken");
            assert_eq!(log.recent(None)[0].severity, Severity::Error);
        }
    }

    describe "severity" {
        it "round-trips through its name" {
            for severity in [
                Severity::Emergency, Severity::Alert, Severity::Critical, Severity::Error,
                Severity::Warning, Severity::Notice, Severity::Info, Severity::Debug,
            ] {
                assert_eq!(Severity::from_str(severity.as_str()), Some(severity));
            }
            assert_eq!(Severity::from_str("verbose"), None);
        }

        it "orders more severe levels first" {
            assert!(Severity::Error < Severity::Info);
            assert!(Severity::Emergency < Severity::Debug);
        }
    }
}
