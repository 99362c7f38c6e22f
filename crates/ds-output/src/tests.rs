use std::fs;

use ds_core::{CustomerId, Tick};
use ds_sim::{SimEvent, SimObserver, TickSummary};

use crate::csv::CsvWriter;
use crate::observer::SimOutputObserver;
use crate::row::{CustomerResultRow, TickSummaryRow};
use crate::writer::OutputWriter;

fn sample_customer_row() -> CustomerResultRow {
    CustomerResultRow {
        customer_id:     1,
        depart_tick:     42,
        wait_time:       7,
        satisfaction:    90,
        finished_eating: true,
        profit:          60.0,
    }
}

fn sample_summary_row() -> TickSummaryRow {
    TickSummaryRow {
        tick:                42,
        profit:              512.5,
        active_customers:    4,
        queued_customers:    2,
        executing_servos:    3,
        completed_customers: 9,
    }
}

mod csv_backend {
    use super::*;

    #[test]
    fn writes_headers_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.write_customer_result(&sample_customer_row()).unwrap();
        writer.write_tick_summary(&sample_summary_row()).unwrap();
        writer.finish().unwrap();

        let customers = fs::read_to_string(dir.path().join("customer_results.csv")).unwrap();
        let mut lines = customers.lines();
        assert_eq!(
            lines.next(),
            Some("customer_id,depart_tick,wait_time,satisfaction,finished_eating,profit")
        );
        assert_eq!(lines.next(), Some("1,42,7,90,1,60"));

        let summaries = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        let mut lines = summaries.lines();
        assert_eq!(
            lines.next(),
            Some("tick,profit,active_customers,queued_customers,executing_servos,completed_customers")
        );
        assert_eq!(lines.next(), Some("42,512.5,4,2,3,9"));
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }
}

mod observer {
    use super::*;

    #[test]
    fn departures_and_summaries_flow_through() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut output = SimOutputObserver::new(writer);

        output.on_event(&SimEvent::CustomerDeparted {
            tick:            Tick(30),
            customer:        CustomerId(1),
            satisfaction:    0,
            wait_time:       30,
            finished_eating: false,
            profit:          -30.0,
        });
        // Non-departure events are ignored by the writer.
        output.on_event(&SimEvent::CustomerSpawned {
            tick:     Tick(30),
            customer: CustomerId(2),
        });
        output.on_tick_end(&TickSummary {
            tick:                Tick(30),
            profit:              455.0,
            active_customers:    1,
            queued_customers:    1,
            executing_servos:    0,
            completed_customers: 1,
        });
        output.on_sim_end(Tick(30));
        assert!(output.take_error().is_none());

        let customers = fs::read_to_string(dir.path().join("customer_results.csv")).unwrap();
        assert_eq!(customers.lines().count(), 2, "header plus one departure");
        assert!(customers.lines().nth(1).unwrap().starts_with("1,30,30,0,0,"));

        let summaries = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(summaries.lines().nth(1), Some("30,455,1,1,0,1"));
    }

    /// A writer whose customer-result channel always fails, for exercising
    /// the observer's error capture.
    struct FailingWriter;

    impl OutputWriter for FailingWriter {
        fn write_customer_result(&mut self, _row: &CustomerResultRow) -> crate::OutputResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full").into())
        }

        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> crate::OutputResult<()> {
            Ok(())
        }

        fn finish(&mut self) -> crate::OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn writer_errors_surface_through_take_error() {
        let mut output = SimOutputObserver::new(FailingWriter);
        output.on_event(&SimEvent::CustomerDeparted {
            tick:            Tick(5),
            customer:        CustomerId(1),
            satisfaction:    50,
            wait_time:       0,
            finished_eating: true,
            profit:          50.0,
        });
        output.on_sim_end(Tick(5));
        assert!(output.take_error().is_some());
        // Error slot is cleared by the take.
        assert!(output.take_error().is_none());
    }
}
