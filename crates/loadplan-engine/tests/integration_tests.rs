//! Integration tests for loadplan-engine.

use loadplan_engine::{
    CargoItem, DivisionMode, LoadingMethod, Plan, Planner, Rect, TruckCatalog, TruckCategory,
    TruckType,
};

fn item(id: &str, length: f64, width: f64, height: f64, weight: f64) -> CargoItem {
    CargoItem::new(id, "machine base")
        .with_dims(length, width, height)
        .with_weight(weight)
}

/// Single-truck-type catalog used by scenarios that pin the capacity.
fn catalog_with_capacity(max_cargo_weight: f64) -> TruckCatalog {
    TruckCatalog::new(vec![TruckType {
        id: "test-flatbed".to_string(),
        name: "Test Flatbed".to_string(),
        category: TruckCategory::Flatbed,
        deck_length: 48.0,
        deck_width: 8.5,
        deck_height: 5.0,
        max_cargo_weight,
        tare_weight: 13000.0,
        loading: LoadingMethod::CraneLoad,
    }])
    .unwrap()
}

fn assert_plan_feasible(plan: &Plan) {
    for load in &plan.loads {
        assert!(
            load.total_weight <= load.truck.max_cargo_weight + 1e-9,
            "truckload {} exceeds capacity: {} > {}",
            load.number,
            load.total_weight,
            load.truck.max_cargo_weight
        );
        assert_eq!(
            load.placements.len(),
            load.items.len(),
            "truckload {} is missing placements",
            load.number
        );

        let rects: Vec<Rect> = load
            .placements
            .iter()
            .map(|p| {
                let item = load
                    .items
                    .iter()
                    .find(|i| i.id() == &p.item_id)
                    .expect("placement for unknown item");
                p.rect(item)
            })
            .collect();
        for (i, a) in rects.iter().enumerate() {
            assert!(
                a.within_deck(load.truck.deck_length, load.truck.deck_width, 0.01),
                "truckload {}: {:?} outside deck",
                load.number,
                a
            );
            for b in rects.iter().skip(i + 1) {
                assert!(
                    !a.overlaps(b, 0.01),
                    "truckload {}: {:?} overlaps {:?}",
                    load.number,
                    a,
                    b
                );
            }
        }
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn test_legal_single_item_no_permits() {
        let planner = Planner::new(TruckCatalog::standard());
        let plan = planner.plan(&[item("A", 20.0, 8.0, 8.0, 30000.0)]).unwrap();

        assert_eq!(plan.loads.len(), 1);
        assert!(plan.all_assigned());
        assert!(plan.loads[0].is_legal);
        assert!(plan.loads[0].permits_required.is_empty());
        assert_plan_feasible(&plan);
    }

    #[test]
    fn test_nine_foot_wide_item_needs_width_permit() {
        // A 9 ft item needs a deck wider than the legal 8.5 ft, so give the
        // catalog one wide trailer.
        let mut trucks = TruckCatalog::standard().trucks().to_vec();
        trucks[0].deck_width = 10.0;
        let planner = Planner::new(TruckCatalog::new(trucks).unwrap());

        let plan = planner.plan(&[item("WIDE", 20.0, 9.0, 6.0, 20000.0)]).unwrap();

        assert_eq!(plan.loads.len(), 1);
        let load = &plan.loads[0];
        assert!(!load.is_legal);
        assert!(load
            .permits_required
            .iter()
            .any(|p| p.contains("Oversize width")));
    }

    #[test]
    fn test_two_half_capacity_items_share_one_truck() {
        let planner = Planner::new(TruckCatalog::standard());
        let plan = planner
            .plan(&[
                item("A", 15.0, 4.0, 5.0, 15000.0),
                item("B", 15.0, 4.0, 5.0, 15000.0),
            ])
            .unwrap();

        assert_eq!(plan.loads.len(), 1);
        assert_eq!(plan.loads[0].items.len(), 2);
        assert_plan_feasible(&plan);
    }

    #[test]
    fn test_divisible_item_splits_against_forty_thousand_pound_trucks() {
        let planner = Planner::new(catalog_with_capacity(40000.0));
        let bulk = CargoItem::new("BULK", "Steel plate stack")
            .with_dims(10.0, 6.0, 2.0)
            .with_weight(5000.0)
            .with_quantity(10)
            .with_division(DivisionMode::ByQuantity { min_quantity: 2 });

        let plan = planner.plan(&[bulk]).unwrap();

        assert!(plan.all_assigned());
        assert_eq!(plan.split_groups.len(), 1);
        let group = &plan.split_groups[0];
        assert_eq!(group.original_id, "BULK");

        // Parts sum to the original quantity; none below the minimum.
        let total_units: u32 = plan.loads.iter().map(|l| l.unit_count()).sum();
        assert_eq!(total_units, 10);
        for load in &plan.loads {
            for part in &load.items {
                assert!(part.quantity() >= 2, "undersized part {:?}", part.id());
            }
        }
        assert_plan_feasible(&plan);
    }

    #[test]
    fn test_item_too_large_for_every_truck_only_in_unassigned() {
        let planner = Planner::new(TruckCatalog::standard());
        let plan = planner
            .plan(&[
                item("HUGE", 100.0, 8.0, 5.0, 20000.0),
                item("OK", 10.0, 4.0, 5.0, 10000.0),
            ])
            .unwrap();

        assert_eq!(plan.loads.len(), 1);
        assert_eq!(plan.unassigned.len(), 1);
        assert_eq!(plan.unassigned[0].item.id(), "HUGE");
        assert!(plan.unassigned[0].reason.contains("does not fit any truck"));
        for load in &plan.loads {
            assert!(load.items.iter().all(|i| i.id() != "HUGE"));
        }
    }

    #[test]
    fn test_replan_to_undersized_truck_splits() {
        let planner = Planner::new(TruckCatalog::standard());
        let plan = planner
            .plan(&[
                item("A", 10.0, 4.0, 5.0, 22000.0),
                item("B", 10.0, 4.0, 5.0, 22000.0),
            ])
            .unwrap();
        assert_eq!(plan.loads.len(), 1);

        // 44,000 lbs forced onto 40,000 lb double drops must split.
        let outcome = planner.replan(&plan, 0, "doubledrop-29").unwrap();
        assert!(outcome.split_occurred);
        assert!(outcome.plan.loads.len() > 1);
        for load in &outcome.plan.loads {
            assert!(load.total_weight <= load.truck.max_cargo_weight + 1e-9);
        }
        assert_plan_feasible(&outcome.plan);
    }
}

mod properties {
    use super::*;

    fn mixed_fleet_items() -> Vec<CargoItem> {
        vec![
            item("press", 20.0, 8.0, 8.0, 30000.0),
            item("beam-1", 40.0, 2.0, 2.0, 8000.0),
            item("beam-2", 40.0, 2.0, 2.0, 8000.0),
            item("coil", 6.0, 6.0, 5.0, 24000.0),
            CargoItem::new("excavator", "Tracked excavator")
                .with_dims(25.0, 8.0, 9.5)
                .with_weight(38000.0),
            item("skid-1", 4.0, 4.0, 3.0, 3000.0).with_stackable(true),
            item("skid-2", 4.0, 4.0, 3.0, 3000.0).with_stackable(true),
        ]
    }

    #[test]
    fn test_plans_are_feasible() {
        let planner = Planner::new(TruckCatalog::standard());
        let plan = planner.plan(&mixed_fleet_items()).unwrap();

        assert!(plan.all_assigned(), "unassigned: {:?}", plan.unassigned);
        assert_plan_feasible(&plan);

        let placed: usize = plan.loads.iter().map(|l| l.items.len()).sum();
        assert_eq!(placed, 7);
        assert_eq!(plan.summary.truck_count, plan.loads.len());
        assert_eq!(plan.summary.total_items, placed);
    }

    #[test]
    fn test_determinism_across_invocations() {
        let planner = Planner::new(TruckCatalog::standard());
        let items = mixed_fleet_items();

        let signature = |plan: &Plan| -> Vec<(String, Vec<String>, Vec<(f64, f64, bool)>)> {
            plan.loads
                .iter()
                .map(|l| {
                    (
                        l.truck.id.clone(),
                        l.items.iter().map(|i| i.id().clone()).collect(),
                        l.placements.iter().map(|p| (p.x, p.z, p.rotated)).collect(),
                    )
                })
                .collect()
        };

        let first = planner.plan(&items).unwrap();
        let second = planner.plan(&items).unwrap();
        let third = planner.plan(&items).unwrap();

        assert_eq!(signature(&first), signature(&second));
        assert_eq!(signature(&first), signature(&third));
    }

    #[test]
    fn test_rebalancing_preserves_truck_count_and_feasibility() {
        // Skewed weights force an uneven first-pass assignment.
        let planner = Planner::new(catalog_with_capacity(48000.0));
        let items = vec![
            item("h1", 10.0, 4.0, 4.0, 30000.0),
            item("h2", 10.0, 4.0, 4.0, 15000.0),
            item("h3", 8.0, 4.0, 4.0, 1500.0),
            item("l1", 10.0, 4.0, 4.0, 9000.0),
        ];
        let plan = planner.plan(&items).unwrap();

        assert!(plan.all_assigned());
        assert_plan_feasible(&plan);
        // Greedy assignment alone needs at most one truck per item.
        assert!(plan.loads.len() <= items.len());
    }

    #[test]
    fn test_split_group_weight_sum_by_weight_mode() {
        let planner = Planner::new(catalog_with_capacity(40000.0));
        let tank = CargoItem::new("TANK", "Ballast water tank")
            .with_dims(20.0, 8.0, 7.0)
            .with_weight(90000.0)
            .with_division(DivisionMode::ByWeight { min_weight: 10000.0 });

        let plan = planner.plan(&[tank]).unwrap();

        assert!(plan.all_assigned(), "unassigned: {:?}", plan.unassigned);
        assert_eq!(plan.split_groups.len(), 1);

        let assigned_weight: f64 = plan.loads.iter().map(|l| l.total_weight).sum();
        assert!((assigned_weight - 90000.0).abs() < 1e-6);
        assert_plan_feasible(&plan);
    }

    #[test]
    fn test_by_weight_split_with_undersized_remainder_stays_assignable() {
        // 85,000 over 40,000-lb trucks carves 40 + 40 + 5; the undersized
        // tail must not collapse into a part no truck can carry.
        let planner = Planner::new(catalog_with_capacity(40000.0));
        let tank = CargoItem::new("TANK", "Ballast water tank")
            .with_dims(20.0, 8.0, 7.0)
            .with_weight(85000.0)
            .with_division(DivisionMode::ByWeight { min_weight: 10000.0 });

        let plan = planner.plan(&[tank]).unwrap();

        assert!(plan.all_assigned(), "unassigned: {:?}", plan.unassigned);
        assert_eq!(plan.loads.len(), 3);
        let assigned_weight: f64 = plan.loads.iter().map(|l| l.total_weight).sum();
        assert!((assigned_weight - 85000.0).abs() < 1e-6);
        assert_plan_feasible(&plan);
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        let planner = Planner::new(TruckCatalog::standard());
        let bad = CargoItem::new("BAD", "ghost").with_dims(-1.0, 4.0, 5.0).with_weight(100.0);
        assert!(planner.plan(&[bad]).is_err());
    }
}
