use attempt_rail::Attempt;

#[test]
fn map_result_and_map_error_skip_the_other_variant() {
    let failure = Attempt::<i32, &str>::failure("e");
    assert_eq!(failure.map_result(|r| r + 1), Attempt::failure("e"));

    let success = Attempt::<i32, &str>::success(1);
    assert_eq!(success.map_error(|e| e.len()), Attempt::success(1));
}

#[test]
fn map_result_composes() {
    let f = |x: i32| x * 3;
    let g = |x: i32| x - 1;

    for attempt in [Attempt::<i32, &str>::success(5), Attempt::failure("e")] {
        assert_eq!(attempt.map_result(f).map_result(g), attempt.map_result(|x| g(f(x))));
    }
}

#[test]
fn transform_result_short_circuits_after_failure() {
    let mut calls = 0;
    let outcome = Attempt::<i32, &str>::success(1)
        .transform_result(|r| {
            calls += 1;
            Attempt::<i32, &str>::failure(if r > 0 { "stop" } else { "other" })
        })
        .transform_result(|r| {
            calls += 1;
            Attempt::success(r + 1)
        });

    assert_eq!(calls, 1);
    assert_eq!(outcome, Attempt::failure("stop"));
}

#[test]
fn recover_error_only_runs_on_failure() {
    let recovered = Attempt::<i32, &str>::failure("missing").recover_error(|e| {
        assert_eq!(e, "missing");
        Attempt::<i32, ()>::success(0)
    });
    assert_eq!(recovered, Attempt::success(0));

    let untouched = Attempt::<i32, &str>::success(3)
        .recover_error(|_| -> Attempt<i32, ()> { panic!("recovered a success") });
    assert_eq!(untouched, Attempt::success(3));
}

#[test]
fn transform_runs_exactly_one_branch() {
    let from_success: Attempt<String, bool> = Attempt::<u8, &str>::success(7)
        .transform(|r| Attempt::success(r.to_string()), |_| Attempt::failure(false));
    assert_eq!(from_success, Attempt::success("7".to_string()));

    let from_failure: Attempt<String, bool> = Attempt::<u8, &str>::failure("e")
        .transform(|_| Attempt::failure(true), |e| Attempt::success(e.to_uppercase()));
    assert_eq!(from_failure, Attempt::success("E".to_string()));
}

#[test]
fn transformation_flow_threads_both_sides() {
    let result0 = 0i32;
    let result1 = "res";
    let result2 = 0i64;
    let result3 = "0";
    let error0 = 0i32;
    let error1 = 0i64;
    let error2 = "fail";
    let error3 = false;

    let outcome = Attempt::<i32, i64>::success(result0)
        .recover_error(|err| -> Attempt<i32, i64> { panic!("recovered a success: {err}") })
        .transform_result(|_| Attempt::success(result1.to_string()))
        .transform_result_adapting(
            |res: String| {
                assert_eq!(res, result1);
                Attempt::<String, i32>::failure(error0)
            },
            |err: i32| {
                assert_eq!(err, error0);
                i64::from(err)
            },
        )
        .if_success(|_| panic!("adapted step should have failed"))
        .transform_result(|res| -> Attempt<String, i64> { panic!("skipped step ran with {res}") })
        .recover_error(|err| {
            assert_eq!(err, i64::from(error0));
            Attempt::<String, i64>::failure(error1)
        })
        .recover_error_adapting(
            |err: i64| {
                assert_eq!(err, error1);
                Attempt::<i64, i64>::success(result2)
            },
            |res: i64| {
                assert_eq!(res, result2);
                res.to_string()
            },
        )
        .if_failure(|err| panic!("recovered attempt still failed with {err}"))
        .flat_map(|attempt| {
            assert_eq!(attempt.get_result(), &result2.to_string());
            Attempt::<String, &str>::failure(error2)
        })
        .if_success(|_| panic!("flat_map result should be a failure"))
        .if_failure(|err| assert_eq!(*err, error2))
        .transform(|_| Attempt::failure(error3), |_| Attempt::success(result3));

    assert_eq!(outcome, Attempt::<&str, bool>::success(result3));
}

#[test]
fn result_round_trip_preserves_variant() {
    assert_eq!(Attempt::from_result(Ok::<u8, &str>(1)).to_result(), Ok(1));
    assert_eq!(Attempt::from_result(Err::<u8, &str>("e")).to_result(), Err("e"));
}
