#[cfg(test)]
pub const POST_DOC: &str = r#"---
title: "IPL 2025 Betting Guide: Odds, Teams and Tips"
slug: "ipl-2025-betting-guide"
date: "2025-01-15"
excerpt: "Everything you need to know before the first ball."
category: "Cricket"
tags: ["cricket", "ipl", "betting"]
---

# IPL 2025 Betting Guide

The new season is almost here, and the **auction results** changed the odds
for several franchises.

## What the bookmakers say

Early markets put *Mumbai* and *Chennai* ahead of the pack.

* squad depth
* home pitch record
* captaincy changes

Always check the [responsible gambling page](https://example.com/responsible-gambling)
before placing a bet.
"#;

#[cfg(test)]
pub const POST_DOC_BARE: &str = r#"# A post without a header

Nothing above the title here, so every field falls back to its default
and the body is the file as written.
"#;
