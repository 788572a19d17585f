use ndpoint::{types::NormType, Point, Vector};

/// Points and vectors
///
/// Demonstration of building points, moving them by vectors and comparing them
/// with the lexicographic and the lattice orders
fn main() {
    // Points can be created from up to four values: the remaining components are zero
    let mut p = Point::<f64, 4>::from_xyz(-3.0, 4.0, 4.5);
    println!("p = {p}");

    // Scale a point, then move it by a vector
    p *= 5.6;
    let v = Vector::<f64, 4>::from([3.5, 4.1, 2.2, 3.2]);
    println!("5.6 p + v = {}", p + v);

    // Norms are returned as f64. For integer points, norm1 and norm_infinity are exact
    let q = Point::<i32, 3>::from_xyz(3, -1, i32::MIN);
    println!("|q|_2 = {}", q.norm(NormType::L2));
    println!("|q|_1 = {}", q.norm1());
    println!("|q|_inf = {}", q.norm_infinity());

    // The infimum and supremum of two points bound a box containing both
    let a = Point::<i32, 2>::from_xy(1, 5);
    let b = Point::<i32, 2>::from_xy(4, 2);
    let lower = a.inf(&b);
    let upper = a.sup(&b);
    println!("box: {lower} to {upper}");
    println!(
        "a is inside the box: {}",
        a.is_upper(&lower) && a.is_lower(&upper)
    );

    // a and b are incomparable in the lattice, but a < b lexicographically
    println!("lattice order: {:?}", a.lattice_cmp(&b));
    println!("lexicographic order: {:?}", a.cmp(&b));
}
