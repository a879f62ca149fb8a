//! Route building — slices recipients into batches following an allocation.

use msgroute_core::{Route, RouteError, RouteResponse, RouteResult, TierSchedule};

use crate::allocator::Allocation;

/// Slice `recipients` into routes, tier by tier in allocation order.
///
/// Each batch takes the next `capacity` recipients and is addressed to the
/// tier prefix plus its 1-based index within the tier. The allocation must
/// cover exactly `recipients.len()` using only tiers of `schedule`.
pub fn build_routes(
    message: &str,
    recipients: &[String],
    allocation: &Allocation,
    schedule: &TierSchedule,
) -> RouteResult<RouteResponse> {
    let allocated = allocation.total();
    if allocated != recipients.len() {
        return Err(RouteError::AllocationMismatch {
            allocated,
            recipients: recipients.len(),
        });
    }

    let mut routes = Vec::with_capacity(allocation.batch_count());
    let mut cursor = 0;

    for (capacity, count) in allocation.iter() {
        if count == 0 {
            continue;
        }
        let tier = schedule
            .get(capacity)
            .ok_or(RouteError::UnknownTier { capacity })?;
        for index in 1..=count {
            let end = cursor + tier.capacity;
            routes.push(Route {
                ip: tier.destination(index),
                recipients: recipients[cursor..end].to_vec(),
            });
            cursor = end;
        }
    }

    if cursor != recipients.len() {
        return Err(RouteError::AllocationMismatch {
            allocated: cursor,
            recipients: recipients.len(),
        });
    }

    Ok(RouteResponse {
        message: message.to_string(),
        routes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::allocate;
    use msgroute_core::Tier;

    fn numbers(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{:010}", 5550000000usize + i)).collect()
    }

    fn build(n: usize) -> RouteResponse {
        let schedule = TierSchedule::default();
        let recipients = numbers(n);
        let allocation = allocate(recipients.len(), &schedule);
        build_routes("hi", &recipients, &allocation, &schedule).unwrap()
    }

    fn shape(resp: &RouteResponse) -> Vec<(&str, usize)> {
        resp.routes
            .iter()
            .map(|r| (r.ip.as_str(), r.recipients.len()))
            .collect()
    }

    #[test]
    fn eleven_recipients() {
        let resp = build(11);
        assert_eq!(resp.message, "hi");
        assert_eq!(shape(&resp), vec![("10.0.3.1", 10), ("10.0.1.1", 1)]);
        assert_eq!(resp.routes[1].recipients, vec![numbers(11)[10].clone()]);
    }

    #[test]
    fn seventeen_recipients() {
        let resp = build(17);
        assert_eq!(
            shape(&resp),
            vec![("10.0.3.1", 10), ("10.0.2.1", 5), ("10.0.1.1", 1), ("10.0.1.2", 1)]
        );
    }

    #[test]
    fn fifty_one_recipients() {
        let resp = build(51);
        assert_eq!(
            shape(&resp),
            vec![("10.0.4.1", 25), ("10.0.4.2", 25), ("10.0.1.1", 1)]
        );
    }

    #[test]
    fn preserves_order_without_loss() {
        let recipients = numbers(107);
        let resp = build(107);
        let flattened: Vec<String> = resp
            .routes
            .iter()
            .flat_map(|r| r.recipients.iter().cloned())
            .collect();
        assert_eq!(flattened, recipients);
    }

    #[test]
    fn no_recipients_no_routes() {
        let resp = build(0);
        assert!(resp.routes.is_empty());
    }

    #[test]
    fn mismatched_allocation_is_rejected() {
        let schedule = TierSchedule::default();
        let allocation = allocate(12, &schedule);
        let err = build_routes("hi", &numbers(11), &allocation, &schedule).unwrap_err();
        assert!(matches!(
            err,
            RouteError::AllocationMismatch { allocated: 12, recipients: 11 }
        ));
        assert!(!err.is_client_error());
    }

    #[test]
    fn allocation_from_another_schedule_is_rejected() {
        let other = TierSchedule::new(vec![
            Tier::new(3, "172.16.3."),
            Tier::new(1, "172.16.1."),
        ])
        .unwrap();
        let allocation = allocate(7, &other);
        assert_eq!(allocation.total(), 7);

        let err = build_routes("hi", &numbers(7), &allocation, &TierSchedule::default())
            .unwrap_err();
        assert!(matches!(err, RouteError::UnknownTier { capacity: 3 }));
        assert!(!err.is_client_error());
    }

    #[test]
    fn unit_only_allocation_builds_against_default_schedule() {
        // Only capacity 1 is used, which the default schedule also carries.
        let other = TierSchedule::new(vec![Tier::new(1, "172.16.1.")]).unwrap();
        let allocation = allocate(3, &other);
        let resp =
            build_routes("hi", &numbers(3), &allocation, &TierSchedule::default()).unwrap();
        let ips: Vec<&str> = resp.routes.iter().map(|r| r.ip.as_str()).collect();
        assert_eq!(ips, vec!["10.0.1.1", "10.0.1.2", "10.0.1.3"]);
        assert_eq!(resp.recipient_count(), 3);
    }
}
