// 每道题用作业里给的样例数据跑一遍，把结果打出来看
// 日志级别用 RUST_LOG 控制，比如 RUST_LOG=debug 能看到算法内部的过程
use log::{ error, info };

use ds_exercises::ackermann::{
    ackermann_iterative,
    ackermann_iterative_trace,
    ackermann_recursive,
    ackermann_recursive_trace,
};
use ds_exercises::brackets::check_brackets;
use ds_exercises::fibonacci::{ k_fibonacci_running_sum, k_fibonacci_sequence };
use ds_exercises::freq_list::FreqList;
use ds_exercises::leetcode::{ move_zeroes, two_sum };
use ds_exercises::linked_list::LinkedList;
use ds_exercises::polynomial::Polynomial;
use ds_exercises::seq_list::{ reverse_array, SeqList };
use ds_exercises::sorting::{ insertion_sort, measure_sort, random_permutation };
use ds_exercises::Result;

fn seq_list_demo() -> Result<()> {
    info!("seq list: reverse");
    let mut list = SeqList::from_slice(&[1, 2, 3, 4, 5])?;
    let mut arr = [1, 2, 3, 4, 5];
    println!("Original SeqList: {}", list);
    list.reverse();
    println!("Reversed SeqList: {}", list);
    println!("Original Array: {:?}", arr);
    reverse_array(&mut arr);
    println!("Reversed Array: {:?}", arr);

    info!("seq list: delete elements common to B and C");
    let mut a = SeqList::from_slice(&[1, 2, 3, 4])?;
    let b = SeqList::from_slice(&[2, 3])?;
    let c = SeqList::from_slice(&[3, 4])?;
    println!("Original A: {}", a);
    println!("B: {}", b);
    println!("C: {}", c);
    a.delete_common_sorted(&b, &c);
    println!("Modified A: {}", a);

    info!("seq list: intersection");
    let a = SeqList::from_slice_with_capacity(&[1, 2, 4, 5, 6], 20)?;
    let b = SeqList::from_slice_with_capacity(&[2, 3, 5, 7], 20)?;
    println!("List A: {}", a);
    println!("List B: {}", b);
    println!("Intersection C: {}", SeqList::intersection(&a, &b));
    Ok(())
}

fn linked_list_demo() {
    info!("linked list: merge two ascending lists into one descending list");
    let l1: LinkedList<i32> = vec![1, 3, 5].into_iter().collect();
    let l2: LinkedList<i32> = vec![2, 4, 6].into_iter().collect();
    println!("List 1: {}", l1);
    println!("List 2: {}", l2);
    let merged = LinkedList::merge_descending(l1, l2);
    println!("Merged and Reversed List: {}", merged);

    info!("linked list: delete values between mink and maxk");
    let mut list: LinkedList<i32> = (1..=9).collect();
    println!("Original list: {}", list);
    let (mink, maxk) = (4, 8);
    list.delete_range(&mink, &maxk);
    println!("List after deleting nodes with values in range ({}, {}): {}", mink, maxk, list);
}

fn freq_list_demo() {
    info!("frequency-ordered list");
    let mut list = FreqList::new();
    for x in [5, 3, 8, 6] {
        list.insert(x);
    }
    println!("{}", list);

    let accesses: [&[i32]; 6] = [&[5], &[8], &[8], &[3, 3, 3], &[5], &[6, 6, 6, 6, 6, 6]];
    for batch in accesses {
        for x in batch {
            list.locate(x);
        }
        println!("{}", list);
    }
}

fn brackets_demo() {
    info!("bracket matching");
    let tests = [
        "([{}])",
        "([]{})",
        "([}{])",
        "([)]",
        "([]",
        "abc{[()]}123",
        "",
        "{[()]}[]{}",
        "{[(])}",
        "(((([[]]))){})",
    ];
    for (i, s) in tests.iter().enumerate() {
        match check_brackets(s) {
            Ok(()) => println!("[{:>2}] {:<20} -> matched", i + 1, s),
            Err(mismatch) => println!("[{:>2}] {:<20} -> not matched: {}", i + 1, s, mismatch),
        }
    }
}

fn ackermann_demo() -> Result<()> {
    info!("ackermann");
    let (m, n) = (2, 1);
    println!("akm_rec({},{})  = {}", m, n, ackermann_recursive(m, n)?);
    println!("akm_iter({},{}) = {}", m, n, ackermann_iterative(m, n)?);
    println!();
    print!("{}", ackermann_iterative_trace(m, n)?);
    println!();
    let trace = ackermann_recursive_trace(m, n)?;
    print!("{}", trace);
    println!("\nResult from akm_rec_trace: akm({},{}) = {}", m, n, trace.result);
    Ok(())
}

fn fibonacci_demo() -> Result<()> {
    info!("k-step fibonacci");
    let (k, m) = (3, 12);
    let seq = k_fibonacci_sequence(k, m)?;
    let line: Vec<String> = seq.iter().map(|x| x.to_string()).collect();
    println!("Fibonacci series (k={}): {}", k, line.join(" "));
    println!("f_{} = {}", m, k_fibonacci_running_sum(k, m)?);

    // 阶数非法只记一条日志
    if let Err(e) = k_fibonacci_sequence(0, m) {
        error!("k = 0 rejected: {}", e);
    }
    Ok(())
}

fn polynomial_demo() -> Result<()> {
    info!("polynomial calculator");
    let a = Polynomial::from_terms([(3, 2), (2, 1), (-1, 0)])?;
    let b = Polynomial::from_terms([(1, 3), (-2, 1), (4, 0)])?;
    let x = 2.0;

    println!("A: {}    ({})", a, a.to_pairs());
    println!("B: {}    ({})", b, b.to_pairs());
    println!("A({}) = {:.6}", x, a.eval(x));

    let d = a.derivative()?;
    println!("A'    = {}    ({})", d, d.to_pairs());
    let sum = (&a + &b)?;
    println!("A + B = {}    ({})", sum, sum.to_pairs());
    let diff = (&a - &b)?;
    println!("A - B = {}    ({})", diff, diff.to_pairs());
    let product = (&a * &b)?;
    println!("A * B = {}    ({})", product, product.to_pairs());
    Ok(())
}

fn sorting_demo() {
    info!("insertion sort");
    let mut arr = [5, 2, 9, 1, 5, 6];
    insertion_sort(&mut arr);
    println!("sorted: {:?}", arr);

    let mut rng = rand::thread_rng();
    for n in [100, 1000, 5000] {
        let data = random_permutation(n, &mut rng);
        let elapsed = measure_sort(insertion_sort::<u32>, &data);
        println!("insertion sort, n = {:>5}: {:.3} ms", n, elapsed.as_secs_f64() * 1000.0);
    }
}

fn leetcode_demo() {
    info!("leetcode");
    let mut nums = [0, 1, 0, 3, 12];
    move_zeroes(&mut nums);
    println!("283 move zeroes: {:?}", nums);
    println!("1 two sum: {:?}", two_sum(&[2, 7, 11, 15], 9));
}

fn run() -> Result<()> {
    seq_list_demo()?;
    println!("-----------------------------");
    linked_list_demo();
    println!("-----------------------------");
    freq_list_demo();
    println!("-----------------------------");
    brackets_demo();
    println!("-----------------------------");
    ackermann_demo()?;
    println!("-----------------------------");
    fibonacci_demo()?;
    println!("-----------------------------");
    polynomial_demo()?;
    println!("-----------------------------");
    sorting_demo();
    println!("-----------------------------");
    leetcode_demo();
    Ok(())
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    info!("running exercise demos");

    if let Err(e) = run() {
        error!("demo failed: {}", e);
        std::process::exit(1);
    }

    info!("all demos finished");
}
