//! Mergesort and quicksort over a [`LinkedQueue`].
//!
//! Both algorithms only touch the front of a queue.  Items are moved from
//! queue to queue, never copied, and every helper leaves its input queues
//! empty.  The `_by` variants take a comparator; the plain variants use
//! [`Ord`].

use std::cmp::Ordering;

use rand::Rng;

use crate::queue::LinkedQueue;

/// Moves every item of `q` into its own single-item queue.  `q` is empty
/// afterwards.
pub fn make_queue_of_queues<T>(q: &mut LinkedQueue<T>) -> LinkedQueue<LinkedQueue<T>> {
    let mut overall = LinkedQueue::new();
    while let Ok(item) = q.dequeue() {
        let mut single = LinkedQueue::new();
        single.enqueue(item);
        overall.enqueue(single);
    }
    overall
}

/// Merges two queues sorted from smallest to largest into a new sorted queue.
/// Both inputs are empty afterwards.  When the fronts compare equal, the item
/// from `q1` is emitted, then the item from `q2`.
pub fn merge_sorted_queues<T: Ord>(
    q1: &mut LinkedQueue<T>,
    q2: &mut LinkedQueue<T>,
) -> LinkedQueue<T> {
    merge_sorted_queues_by(q1, q2, &mut T::cmp)
}

pub fn merge_sorted_queues_by<T, F>(
    q1: &mut LinkedQueue<T>,
    q2: &mut LinkedQueue<T>,
    cmp: &mut F,
) -> LinkedQueue<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = LinkedQueue::new();
    loop {
        let ordering = match (q1.front(), q2.front()) {
            (Ok(a), Ok(b)) => cmp(a, b),
            _ => break,
        };
        match ordering {
            Ordering::Greater => move_front(q2, &mut merged),
            Ordering::Less => move_front(q1, &mut merged),
            Ordering::Equal => {
                move_front(q1, &mut merged);
                move_front(q2, &mut merged);
            }
        }
    }
    merged.append(q1);
    merged.append(q2);
    merged
}

fn move_front<T>(from: &mut LinkedQueue<T>, to: &mut LinkedQueue<T>) {
    if let Ok(item) = from.dequeue() {
        to.enqueue(item);
    }
}

/// Moves every item of `q_in` into `q_small`, `q_equals` or `q_large`
/// according to how it compares with `pivot`.  `q_in` is empty afterwards.
pub fn partition<T: Ord>(
    q_in: &mut LinkedQueue<T>,
    pivot: &T,
    q_small: &mut LinkedQueue<T>,
    q_equals: &mut LinkedQueue<T>,
    q_large: &mut LinkedQueue<T>,
) {
    partition_by(q_in, pivot, q_small, q_equals, q_large, &mut T::cmp)
}

pub fn partition_by<T, F>(
    q_in: &mut LinkedQueue<T>,
    pivot: &T,
    q_small: &mut LinkedQueue<T>,
    q_equals: &mut LinkedQueue<T>,
    q_large: &mut LinkedQueue<T>,
    cmp: &mut F,
) where
    F: FnMut(&T, &T) -> Ordering,
{
    while let Ok(item) = q_in.dequeue() {
        match cmp(&item, pivot) {
            Ordering::Less => q_small.enqueue(item),
            Ordering::Equal => q_equals.enqueue(item),
            Ordering::Greater => q_large.enqueue(item),
        }
    }
}

/// Sorts `q` from smallest to largest using mergesort.
///
/// Blocks are merged in the order they come off the work queue, so items
/// that compare equal may not keep their input order.
pub fn merge_sort<T: Ord>(q: &mut LinkedQueue<T>) {
    merge_sort_by(q, T::cmp)
}

pub fn merge_sort_by<T, F>(q: &mut LinkedQueue<T>, mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut queues = make_queue_of_queues(q);
    while queues.size() > 1 {
        let (Ok(mut first), Ok(mut second)) = (queues.dequeue(), queues.dequeue()) else {
            break;
        };
        queues.enqueue(merge_sorted_queues_by(&mut first, &mut second, &mut cmp));
    }
    if let Ok(mut sorted) = queues.dequeue() {
        q.append(&mut sorted);
    }
}

/// Sorts `q` from smallest to largest using quicksort with a pivot drawn
/// uniformly at random by `rng`.
pub fn quick_sort<T: Ord, R: Rng + ?Sized>(q: &mut LinkedQueue<T>, rng: &mut R) {
    quick_sort_by(q, rng, T::cmp)
}

pub fn quick_sort_by<T, R, F>(q: &mut LinkedQueue<T>, rng: &mut R, mut cmp: F)
where
    R: Rng + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_inner(q, rng, &mut cmp);
}

fn quick_sort_inner<T, R, F>(q: &mut LinkedQueue<T>, rng: &mut R, cmp: &mut F)
where
    R: Rng + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    if q.is_empty() {
        return;
    }
    // Lift the pivot out of the queue so the remainder can be partitioned
    // around it by reference.
    let pivot_position = rng.gen_range(1..=q.size());
    let mut rest = LinkedQueue::new();
    for _ in 1..pivot_position {
        move_front(q, &mut rest);
    }
    let Ok(pivot) = q.dequeue() else {
        return;
    };
    rest.append(q);

    let mut q_small = LinkedQueue::new();
    let mut q_equals = LinkedQueue::new();
    let mut q_large = LinkedQueue::new();
    partition_by(
        &mut rest,
        &pivot,
        &mut q_small,
        &mut q_equals,
        &mut q_large,
        cmp,
    );
    q_equals.enqueue(pivot);

    quick_sort_inner(&mut q_small, rng, cmp);
    quick_sort_inner(&mut q_large, rng, cmp);

    q.append(&mut q_small);
    q.append(&mut q_equals);
    q.append(&mut q_large);
}

/// Builds a queue of `size` items, each drawn uniformly from `0..size`.
pub fn make_random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> LinkedQueue<usize> {
    (0..size).map(|_| rng.gen_range(0..size)).collect()
}
