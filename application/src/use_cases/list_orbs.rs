//! List Orbs use case
//!
//! Walks the remote orb collection page by page, following the cursor the
//! server hands back, and yields orbs as a lazy stream.
//!
//! Round-trips are strictly sequential: the next page is requested only
//! once every orb of the current page has been yielded.

use crate::ports::query_transport::{QueryTransport, TransportError};
use crate::queries::{ListOrbsQuery, decode};
use circleci_domain::{Cursor, Orb, Page};
use futures::{Stream, TryStreamExt, stream};
use std::collections::VecDeque;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while listing orbs
#[derive(Error, Debug)]
pub enum ListOrbsError {
    #[error("Unable to list orbs: {0}")]
    Query(#[from] TransportError),
}

/// Use case for enumerating every orb
pub struct ListOrbsUseCase<T: QueryTransport + ?Sized + 'static> {
    transport: Arc<T>,
    endpoint: String,
}

impl<T: QueryTransport + ?Sized + 'static> ListOrbsUseCase<T> {
    pub fn new(transport: Arc<T>, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    /// Stream every orb in server order.
    ///
    /// Each call starts again from the first page. A failed round-trip is
    /// yielded as the final item; orbs yielded before it remain valid.
    pub fn execute(&self) -> impl Stream<Item = Result<Orb, ListOrbsError>> + Send + use<T> {
        let pager = OrbPager::new(Arc::clone(&self.transport), self.endpoint.clone());

        stream::try_unfold(pager, |mut pager| async move {
            let next = pager.next_orb().await?;
            Ok::<_, ListOrbsError>(next.map(|orb| (orb, pager)))
        })
    }

    /// Drain the stream, stopping at the first error.
    pub async fn collect_all(&self) -> Result<Vec<Orb>, ListOrbsError> {
        self.execute().try_collect().await
    }
}

/// Pagination state carried between round-trips
struct OrbPager<T: QueryTransport + ?Sized> {
    transport: Arc<T>,
    endpoint: String,
    cursor: Cursor,
    pending: VecDeque<(Cursor, Orb)>,
    has_next_page: bool,
    round_trips: usize,
}

impl<T: QueryTransport + ?Sized> OrbPager<T> {
    fn new(transport: Arc<T>, endpoint: String) -> Self {
        Self {
            transport,
            endpoint,
            cursor: Cursor::start(),
            pending: VecDeque::new(),
            has_next_page: true,
            round_trips: 0,
        }
    }

    /// Next orb, fetching pages as needed. `None` once the server reports
    /// no further pages and the last page is drained.
    async fn next_orb(&mut self) -> Result<Option<Orb>, ListOrbsError> {
        loop {
            if let Some((cursor, orb)) = self.pending.pop_front() {
                self.cursor = cursor;
                return Ok(Some(orb));
            }

            if !self.has_next_page {
                info!("Listed orbs in {} round-trip(s)", self.round_trips);
                return Ok(None);
            }

            // An empty page with has_next_page set leaves the cursor where
            // the previous page put it, and the loop asks again.
            let page = self.fetch_page().await?;
            self.has_next_page = page.has_next_page;
            self.pending.extend(page.entries);
        }
    }

    async fn fetch_page(&mut self) -> Result<Page, ListOrbsError> {
        self.round_trips += 1;
        debug!(
            "ListOrbs round-trip {} after cursor {}",
            self.round_trips, self.cursor
        );

        let request = ListOrbsQuery::request(&self.cursor);
        let payload = self.transport.execute(&request, &self.endpoint).await?;
        let page: Page = decode::<ListOrbsQuery>(payload)?.into();

        debug!(
            "Received {} orb(s), has_next_page={}, total_count={}",
            page.len(),
            page.has_next_page,
            page.total_count
        );
        Ok(page)
    }
}
