//! Small exercise problems, each solved with one of the crate's containers.

use container_core::collections::KeyValue;
use container_core::collections::contiguous::Array;
use container_core::collections::hash::HashMap;
use container_core::collections::linked::List;
use container_core::collections::structures::{Deque, Queue, Stack};

/// Finds two distinct indices whose values add up to `target`, remembering each value's index in a
/// HashMap as it goes.
fn two_sum(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let mut seen = HashMap::new();
    for (index, &num) in nums.iter().enumerate() {
        if let Ok(&other) = seen.get(&(target - num)) {
            return Some((other, index));
        }
        seen.insert(num, index);
    }
    None
}

/// Sorts the values by running them through a List's merge sort.
fn sort_list(values: &[i32]) -> Array<i32> {
    let mut list: List<i32> = values.iter().copied().collect();
    list.sort();
    list.into_iter().collect()
}

/// Counts the seconds until person `k` has bought all of their tickets, when everyone buys one
/// ticket per second and rejoins the back of the line if they need more.
fn time_to_buy_tickets(tickets: &[u32], k: usize) -> u32 {
    let mut line: Queue<KeyValue<usize, u32>> = tickets
        .iter()
        .enumerate()
        .map(|(person, &count)| KeyValue::new(person, count))
        .collect();

    let mut seconds = 0;
    while let Some(entry) = line.pop() {
        let (person, remaining) = entry.into_parts();
        if remaining == 0 {
            continue;
        }
        seconds += 1;
        if remaining > 1 {
            line.push(KeyValue::new(person, remaining - 1));
        } else if person == k {
            break;
        }
    }
    seconds
}

/// Computes how much water is held between the bars, using a Stack of indices with decreasing
/// heights.
fn trap_rain_water(heights: &[u32]) -> u32 {
    let mut stack: Stack<usize> = Stack::new();
    let mut water = 0;
    for (i, &height) in heights.iter().enumerate() {
        while let Some(&top) = stack.top() {
            if heights[top] >= height {
                break;
            }
            let floor = heights[top];
            stack.pop();
            let Some(&left) = stack.top() else {
                break;
            };
            let level = heights[left].min(height);
            water += (i - left - 1) as u32 * (level - floor);
        }
        stack.push(i);
    }
    water
}

/// Finds the length of the longest run of values where the maximum and minimum differ by at most
/// `limit`. Two Deques hold the running maxima and minima of the current window.
fn longest_subarray_within(nums: &[i32], limit: i32) -> usize {
    let mut maxima: Deque<i32> = Deque::new();
    let mut minima: Deque<i32> = Deque::new();
    let mut left = 0;
    let mut longest = 0;

    for (right, &num) in nums.iter().enumerate() {
        while maxima.back().is_some_and(|&back| back < num) {
            maxima.pop_back();
        }
        maxima.push_back(num);
        while minima.back().is_some_and(|&back| back > num) {
            minima.pop_back();
        }
        minima.push_back(num);

        while let (Some(&max), Some(&min)) = (maxima.front(), minima.front()) {
            if max - min <= limit {
                break;
            }
            if max == nums[left] {
                maxima.pop_front();
            }
            if min == nums[left] {
                minima.pop_front();
            }
            left += 1;
        }
        longest = longest.max(right + 1 - left);
    }
    longest
}

/// Reports, for each kid, whether `extra` candies would give them at least as many as anyone else.
fn kids_with_candies(candies: &[u32], extra: u32) -> Array<bool> {
    let most = candies.iter().copied().max().unwrap_or(0);
    let mut result = Array::with_cap(candies.len());
    for &count in candies {
        result.push(count + extra >= most);
    }
    result
}

fn main() {
    println!("\n[HashMap] two sum\n");
    println!("{:?}", two_sum(&[2, 7, 11, 15], 9));
    println!("{:?}", two_sum(&[3, 2, 4], 6));

    println!("\n[List] sort list\n");
    println!("{}", sort_list(&[4, 2, 1, 3]));
    println!("{}", sort_list(&[-1, 5, 3, 4, 0]));

    println!("\n[Queue] time needed to buy tickets\n");
    println!("{}", time_to_buy_tickets(&[2, 3, 2], 2));
    println!("{}", time_to_buy_tickets(&[5, 1, 1, 1], 0));

    println!("\n[Stack] trapping rain water\n");
    println!("{}", trap_rain_water(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1]));
    println!("{}", trap_rain_water(&[4, 2, 0, 3, 2, 5]));

    println!("\n[Deque] longest subarray within limit\n");
    println!("{}", longest_subarray_within(&[8, 2, 4, 7], 4));
    println!("{}", longest_subarray_within(&[10, 1, 2, 4, 7, 2], 5));

    println!("\n[Array] kids with the greatest number of candies\n");
    println!("{}", kids_with_candies(&[2, 3, 5, 1, 3], 3));
    println!("{}", kids_with_candies(&[12, 1, 12], 10));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sum() {
        assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
        assert_eq!(two_sum(&[3, 2, 4], 6), Some((1, 2)));
        assert_eq!(two_sum(&[3, 3], 6), Some((0, 1)));
        assert_eq!(two_sum(&[1, 2], 7), None);
    }

    #[test]
    fn test_sort_list() {
        assert_eq!(&*sort_list(&[4, 2, 1, 3]), &[1, 2, 3, 4]);
        assert_eq!(&*sort_list(&[-1, 5, 3, 4, 0]), &[-1, 0, 3, 4, 5]);
        assert!(sort_list(&[]).is_empty());
    }

    #[test]
    fn test_time_to_buy_tickets() {
        assert_eq!(time_to_buy_tickets(&[2, 3, 2], 2), 6);
        assert_eq!(time_to_buy_tickets(&[5, 1, 1, 1], 0), 8);
        assert_eq!(time_to_buy_tickets(&[1], 0), 1);
    }

    #[test]
    fn test_trap_rain_water() {
        assert_eq!(trap_rain_water(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1]), 6);
        assert_eq!(trap_rain_water(&[4, 2, 0, 3, 2, 5]), 9);
        assert_eq!(trap_rain_water(&[]), 0);
    }

    #[test]
    fn test_longest_subarray_within() {
        assert_eq!(longest_subarray_within(&[8, 2, 4, 7], 4), 2);
        assert_eq!(longest_subarray_within(&[10, 1, 2, 4, 7, 2], 5), 4);
        assert_eq!(longest_subarray_within(&[4, 2, 2, 2, 4, 4, 2, 2], 0), 3);
    }

    #[test]
    fn test_kids_with_candies() {
        assert_eq!(&*kids_with_candies(&[2, 3, 5, 1, 3], 3), &[true, true, true, false, true]);
        assert_eq!(&*kids_with_candies(&[12, 1, 12], 10), &[true, false, true]);
    }
}
