use prism_base24::{chain, Base24Number};

fn main() {
    let vals: [u32; 10] = [0, 1, 23, 24, 42, 575, 576, 1008, 123_456_789, u32::MAX];
    let mut bytes = Vec::with_capacity(vals.len() * 9 + 18);
    for &v in &vals {
        let n = Base24Number::from_u32(v);
        bytes.extend_from_slice(n.digits());
        bytes.push(n.size() as u8);
    }

    let out = chain(Base24Number::from_u32(42), Base24Number::from_u32(24), 1000);
    for n in [out.sum, out.product] {
        bytes.extend_from_slice(n.digits());
        bytes.push(n.size() as u8);
    }

    let digest = sha256(&bytes);
    println!("BASE24_HASH {}", digest);
}

fn sha256(data: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(data);
    let out = hasher.finalize();
    hex::encode(out)
}
