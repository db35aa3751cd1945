use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use palletrack_events::{EventBus, PalletChange, Subscription};
use palletrack_inventory::{CategoryGroup, ViewMode, board};

use crate::store::{PalletStore, StoreError};

/// Handle to control and join a background worker.
#[derive(Debug)]
pub struct WorkerHandle {
    shutdown: mpsc::Sender<()>,
    join: Option<thread::JoinHandle<()>>,
}

impl WorkerHandle {
    /// Request graceful shutdown and wait for the worker to stop.
    pub fn shutdown(mut self) {
        let _ = self.shutdown.send(());
        if let Some(j) = self.join.take() {
            let _ = j.join();
        }
    }
}

/// Keeps a grouped board current.
///
/// - Renders once at start-up
/// - Re-fetches a fresh snapshot after every change notification (bursts are
///   coalesced into one refresh)
/// - Hands each recomputed board to `on_board`; the board borrows a snapshot
///   that lives only for the duration of the call
/// - Store failures are logged and the loop keeps going
#[derive(Debug)]
pub struct BoardRefresher;

impl BoardRefresher {
    /// Spawn the refresh thread. The bus subscription is taken before this
    /// returns, so no change committed afterwards is missed.
    pub fn spawn<S, B, F>(
        name: &'static str,
        store: S,
        bus: &B,
        view: ViewMode,
        query: impl Into<String>,
        mut on_board: F,
    ) -> io::Result<WorkerHandle>
    where
        S: PalletStore + 'static,
        B: EventBus<PalletChange>,
        F: FnMut(&[CategoryGroup<'_>]) + Send + 'static,
    {
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();
        let sub: Subscription<PalletChange> = bus.subscribe();
        let query = query.into();

        let join = thread::Builder::new().name(name.to_string()).spawn(move || {
            let mut refresh = || -> Result<(), StoreError> {
                let snapshot = store.fetch(view)?;
                let groups = board(&snapshot, view, &query);
                on_board(groups.as_slice());
                Ok(())
            };
            refresher_loop(name, sub, shutdown_rx, &mut refresh)
        })?;

        Ok(WorkerHandle {
            shutdown: shutdown_tx,
            join: Some(join),
        })
    }
}

fn refresher_loop<R>(
    name: &'static str,
    sub: Subscription<PalletChange>,
    shutdown_rx: mpsc::Receiver<()>,
    refresh: &mut R,
) where
    R: FnMut() -> Result<(), StoreError>,
{
    let tick = Duration::from_millis(250);

    if let Err(err) = refresh() {
        warn!(worker = name, error = %err, "initial board refresh failed");
    }

    loop {
        // Shutdown check (non-blocking)
        if shutdown_rx.try_recv().is_ok() {
            break;
        }

        match sub.recv_batch(tick) {
            Ok(batch) => {
                if let Some(last) = batch.last() {
                    debug!(worker = name, kind = ?last.kind, coalesced = batch.len(), "refreshing board");
                }

                if let Err(err) = refresh() {
                    warn!(worker = name, error = %err, "board refresh failed");
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use palletrack_events::InMemoryEventBus;
    use palletrack_inventory::{Category, PalletDraft, PalletFields};

    use crate::store::InMemoryPalletStore;

    type Bus = Arc<InMemoryEventBus<PalletChange>>;

    /// (category, pallet numbers) per section.
    type Summary = Vec<(Category, Vec<String>)>;

    fn summarize(groups: &[CategoryGroup<'_>]) -> Summary {
        groups
            .iter()
            .map(|g| {
                let numbers = g.items.iter().map(|p| p.pallet_number.to_string()).collect();
                (g.category, numbers)
            })
            .collect()
    }

    fn fields(number: &str, category: Category, choice: &str) -> PalletFields {
        PalletDraft {
            number: number.to_string(),
            category: Some(category),
            description_choice: Some(choice.to_string()),
            ..PalletDraft::default()
        }
        .resolve("PL-")
        .unwrap()
    }

    fn recv(rx: &mpsc::Receiver<Summary>) -> Summary {
        rx.recv_timeout(Duration::from_secs(5)).expect("board refresh")
    }

    /// Receive until a board matching `expected` shows up (coalescing may skip
    /// intermediate boards, never the last one).
    fn wait_for(rx: &mpsc::Receiver<Summary>, expected: &Summary) {
        loop {
            if &recv(rx) == expected {
                return;
            }
        }
    }

    #[test]
    fn renders_initial_board_then_refreshes_on_change() {
        let bus: Bus = Arc::new(InMemoryEventBus::new());
        let store = Arc::new(InMemoryPalletStore::new(bus.clone()));
        let (tx, rx) = mpsc::channel();

        let handle = BoardRefresher::spawn(
            "board-refresher-test",
            store.clone(),
            &bus,
            ViewMode::Active,
            "",
            move |groups| {
                let _ = tx.send(summarize(groups));
            },
        )
        .unwrap();

        assert!(recv(&rx).is_empty());

        store.insert(fields("1", Category::Desktops, "B/C 3RD GEN")).unwrap();
        store.insert(fields("2", Category::Desktops, "B/C 1-2ND GEN")).unwrap();
        let df = store.insert(fields("3", Category::Laptops, "D/F")).unwrap();
        wait_for(
            &rx,
            &vec![
                (Category::Desktops, vec!["PL-2".to_string(), "PL-1".to_string()]),
                (Category::Laptops, vec!["PL-3".to_string()]),
            ],
        );

        store.retire(df.id).unwrap();
        wait_for(
            &rx,
            &vec![(Category::Desktops, vec!["PL-2".to_string(), "PL-1".to_string()])],
        );

        handle.shutdown();
    }

    #[test]
    fn applies_search_query() {
        let bus: Bus = Arc::new(InMemoryEventBus::new());
        let store = Arc::new(InMemoryPalletStore::new(bus.clone()));
        store.insert(fields("10", Category::Aio, "5-7TH GEN")).unwrap();
        store.insert(fields("20", Category::Aio, "↑ 8TH GEN")).unwrap();
        let (tx, rx) = mpsc::channel();

        let handle = BoardRefresher::spawn(
            "board-refresher-search",
            store.clone(),
            &bus,
            ViewMode::Active,
            "pl-2",
            move |groups| {
                let _ = tx.send(summarize(groups));
            },
        )
        .unwrap();

        assert_eq!(recv(&rx), vec![(Category::Aio, vec!["PL-20".to_string()])]);
        handle.shutdown();
    }
}
