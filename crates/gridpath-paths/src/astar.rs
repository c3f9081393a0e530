use gridpath_core::Cell;

use crate::search::{SearchLimits, SearchOutcome};
use crate::state::{NO_PARENT, SearchState};
use crate::traits::AstarPather;

/// Compute the shortest path from `from` to `to` using A*.
///
/// No validation is done on the endpoints: a `from` or `to` outside
/// `pather.bounds()` simply yields [`SearchOutcome::NoPath`]. When
/// `from == to` the one-cell path is returned without consulting the pather.
///
/// All search state is allocated here and dropped on return, so concurrent
/// calls sharing one `pather` are independent.
pub fn astar_path<P: AstarPather + ?Sized>(
    pather: &P,
    from: Cell,
    to: Cell,
    limits: SearchLimits,
) -> SearchOutcome {
    let rng = pather.bounds();
    let (Some(start_idx), Some(goal_idx)) = (rng.index(from), rng.index(to)) else {
        log::debug!("astar {from} -> {to}: endpoint outside {rng}");
        return SearchOutcome::NoPath;
    };

    if start_idx == goal_idx {
        return SearchOutcome::Found(vec![from]);
    }

    let mut st = SearchState::new(rng);
    st.push(start_idx, 0, pather.estimate(from, to), NO_PARENT);

    while let Some(current) = st.pop() {
        let ci = current.idx;
        if ci == goal_idx {
            let path = st.path_to(goal_idx);
            log::debug!(
                "astar {from} -> {to}: {} cells, {} expanded",
                path.len(),
                st.expanded
            );
            return SearchOutcome::Found(path);
        }

        if limits.max_expansions.is_some_and(|max| st.expanded >= max) {
            log::debug!("astar {from} -> {to}: budget of {} expansions spent", st.expanded);
            return SearchOutcome::BudgetExhausted {
                expanded: st.expanded,
            };
        }

        st.nodes[ci].closed = true;
        st.expanded += 1;
        log::trace!("expand {} g={} f={}", current.cell, current.g, current.f);

        let mut nbuf = std::mem::take(&mut st.nbuf);
        nbuf.clear();
        pather.neighbors(current.cell, &mut nbuf);

        let tentative_g = current.g + 1;
        for &np in nbuf.iter() {
            let Some(ni) = rng.index(np) else {
                continue;
            };
            let n = &st.nodes[ni];
            if n.closed || tentative_g >= n.g {
                continue;
            }
            st.push(ni, tentative_g, pather.estimate(np, to), ci);
        }
        st.nbuf = nbuf;
    }

    log::debug!("astar {from} -> {to}: no path, {} expanded", st.expanded);
    SearchOutcome::NoPath
}
