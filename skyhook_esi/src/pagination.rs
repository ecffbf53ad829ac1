use futures_util::{StreamExt, TryStreamExt, stream};

use crate::{EsiClient, EsiResult, query::Query, response::EsiResponse};

impl EsiClient {
    /// Fetches every page of a listing route.
    ///
    /// Page 1 decides the page count through `X-Pages`. Remaining pages are
    /// fetched sequentially or with up to `page_concurrency` requests in
    /// flight; the returned responses are always in page order. A caller
    /// that already put `page` in the query gets exactly that page back.
    pub async fn get_paginated(&self, path: &str, query: &Query) -> EsiResult<Vec<EsiResponse>> {
        if query.contains("page") {
            return Ok(vec![self.get(path, query).await?]);
        }

        let first = self.get(path, query).await?;
        let pages = first.pages();
        log::trace!("esi {path}: page 1 of {pages}");

        let mut responses = vec![first];
        if pages <= 1 {
            return Ok(responses);
        }

        let remaining = 2..=pages;
        let concurrency = self.config().page_concurrency.max(1);
        if concurrency == 1 {
            for page in remaining {
                log::trace!("esi {path}: page {page} of {pages}");
                responses.push(self.get(path, &query.with_page(page)).await?);
            }
            return Ok(responses);
        }

        let rest: Vec<EsiResponse> = stream::iter(remaining)
            .map(|page| {
                let query = query.with_page(page);
                async move {
                    log::trace!("esi {path}: page {page} of {pages}");
                    self.get(path, &query).await
                }
            })
            .buffered(concurrency)
            .try_collect()
            .await?;
        responses.extend(rest);
        Ok(responses)
    }
}
