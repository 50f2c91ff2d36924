//! Page traversal
//!
//! Walks a [`ListOperation`] from page 1 until the server reports no
//! further page. Traversal is driven by the consumer: a page is only
//! requested once every item of the previous page has been handed out,
//! and dropping the stream stops it. Each call starts its own cursor, so
//! concurrent traversals of the same operation never share state.

use super::types::{ListOperation, ListOptions, ListResponse, Pagination, FIRST_PAGE};
use crate::error::{Error, Result};
use futures::future::BoxFuture;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use tracing::debug;

/// Lazy stream of whole pages
pub type PageStream<'a, T> = BoxStream<'a, Result<ListResponse<T>>>;

/// Lazy stream of individual items across pages
pub type ItemStream<'a, T> = BoxStream<'a, Result<T>>;

struct Cursor<'a, O: ?Sized> {
    operation: &'a O,
    options: ListOptions,
    next_page: Option<u64>,
}

/// Page to request after `requested`, if any.
///
/// The larger of the requested page and the reported `current_page` is
/// used so a server echoing a stale page number cannot stall traversal.
fn next_page_after(requested: u64, pagination: &Pagination) -> Option<u64> {
    let current = requested.max(pagination.current_page);
    (current < pagination.total_pages).then(|| current + 1)
}

/// Stream every page of `operation`, starting at page 1.
///
/// Any page already set in `options` is ignored. The first error is
/// yielded and ends the stream.
pub fn pages<'a, O>(operation: &'a O, options: ListOptions) -> PageStream<'a, O::Item>
where
    O: ListOperation + ?Sized,
    O::Item: 'a,
{
    let cursor = Cursor {
        operation,
        options,
        next_page: Some(FIRST_PAGE),
    };

    stream::try_unfold(cursor, |mut cursor| async move {
        let Some(page) = cursor.next_page else {
            return Ok::<_, Error>(None);
        };

        let response = cursor
            .operation
            .fetch_page(cursor.options.for_page(page))
            .await?;

        debug!(
            "Fetched page {}/{} ({} items)",
            page,
            response.pagination.total_pages,
            response.data.len()
        );

        cursor.next_page = next_page_after(page, &response.pagination);
        Ok(Some((response, cursor)))
    })
    .boxed()
}

/// Stream every item of every page in server order
pub fn iterate_all<'a, O>(operation: &'a O, options: ListOptions) -> ItemStream<'a, O::Item>
where
    O: ListOperation + ?Sized,
    O::Item: 'a,
{
    pages(operation, options)
        .map_ok(|page| stream::iter(page.data.into_iter().map(Ok::<_, Error>)))
        .try_flatten()
        .boxed()
}

/// Fetch every page and return all items in order.
///
/// Fails with the first error encountered; items gathered before it are
/// discarded.
pub async fn collect_all<'a, O>(operation: &'a O, options: ListOptions) -> Result<Vec<O::Item>>
where
    O: ListOperation + ?Sized,
    O::Item: 'a,
{
    let items: Vec<O::Item> = iterate_all(operation, options).try_collect().await?;
    debug!("Collected {} items", items.len());
    Ok(items)
}

/// Traversal helpers available on every [`ListOperation`]
pub trait ListOperationExt: ListOperation {
    /// See [`pages`]
    fn pages<'a>(&'a self, options: ListOptions) -> PageStream<'a, Self::Item>
    where
        Self::Item: 'a,
    {
        pages(self, options)
    }

    /// See [`iterate_all`]
    fn iterate_all<'a>(&'a self, options: ListOptions) -> ItemStream<'a, Self::Item>
    where
        Self::Item: 'a,
    {
        iterate_all(self, options)
    }

    /// See [`collect_all`]
    fn collect_all<'a>(&'a self, options: ListOptions) -> BoxFuture<'a, Result<Vec<Self::Item>>>
    where
        Self::Item: 'a,
    {
        Box::pin(collect_all(self, options))
    }
}

impl<O: ListOperation + ?Sized> ListOperationExt for O {}
