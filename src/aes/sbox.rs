//! The AES SubBytes transformation as a Boolean circuit over bit planes.
//!
//! Bit-sliced AES cannot use a lookup-table S-box: there is no single byte
//! to index with, only eight words each holding one bit of every byte in
//! play at once. Instead `sub_bytes` evaluates the Boyar-Peralta minimal
//! circuit for the AES S-box — built entirely from AND, XOR and NOT — once
//! per plane, which applies the S-box to every lane and byte in the state
//! simultaneously.
//!
//! The gate sequence is the standard Boyar-Peralta minimal circuit and is
//! independent of how bytes are assigned to bit positions, so it stays fixed
//! even though [`crate::aes::bitslice::encode_blocks`]/`decode_blocks` define
//! their own bit-position convention.

use super::bitslice::Planes;

/// Apply the S-box to every byte encoded across `planes`, in place.
pub fn sub_bytes(planes: &mut Planes) {
    let u0 = planes[7];
    let u1 = planes[6];
    let u2 = planes[5];
    let u3 = planes[4];
    let u4 = planes[3];
    let u5 = planes[2];
    let u6 = planes[1];
    let u7 = planes[0];

    let t1 = u6 ^ u4;
    let t2 = u3 ^ u0;
    let t3 = u1 ^ u2;
    let t6 = u1 ^ u5;
    let t7 = u0 ^ u6;
    let t13 = u2 ^ u5;
    let t16 = u0 ^ u5;
    let t18 = u6 ^ u5;

    let t4 = u7 ^ t3;
    let t5 = t1 ^ t2;
    let t8 = t1 ^ t6;
    let t9 = u6 ^ t4;

    let t10 = u3 ^ t4;
    let t11 = u7 ^ t5;
    let t12 = t5 ^ t6;
    let t14 = t3 ^ t5;
    let t15 = u5 ^ t7;
    let t17 = u7 ^ t8;
    let t19 = t2 ^ t18;
    let t22 = u0 ^ t4;
    let t54 = t2 & t8;
    let t50 = t9 & t4;

    let t20 = t4 ^ t15;
    let t21 = t1 ^ t13;
    let t39 = t21 ^ t5;
    let t40 = t21 ^ t7;
    let t41 = t7 ^ t19;
    let t42 = t16 ^ t14;
    let t43 = t22 ^ t17;
    let t44 = t19 & t5;
    let t45 = t20 & t11;
    let t47 = t10 & u7;
    let t57 = t16 & t14;

    let t46 = t12 ^ t44;
    let t48 = t47 ^ t44;
    let t49 = t7 & t21;
    let t51 = t40 ^ t49;
    let t52 = t22 & t17;
    let t53 = t52 ^ t49;

    let t55 = t41 & t39;
    let t56 = t55 ^ t54;
    let t58 = t57 ^ t54;
    let t59 = t46 ^ t45;
    let t60 = t48 ^ t42;
    let t61 = t51 ^ t50;
    let t62 = t53 ^ t58;
    let t63 = t59 ^ t56;
    let t64 = t60 ^ t58;
    let t65 = t61 ^ t56;
    let t66 = t62 ^ t43;
    let t67 = t65 ^ t66;
    let t68 = t65 & t63;
    let t69 = t64 ^ t68;
    let t70 = t63 ^ t64;
    let t71 = t66 ^ t68;
    let t72 = t71 & t70;
    let t73 = t69 & t67;
    let t74 = t63 & t66;
    let t75 = t70 & t74;
    let t76 = t70 ^ t68;
    let t77 = t64 & t65;
    let t78 = t67 & t77;
    let t79 = t67 ^ t68;
    let t80 = t64 ^ t72;
    let t81 = t75 ^ t76;
    let t82 = t66 ^ t73;
    let t83 = t78 ^ t79;
    let t84 = t81 ^ t83;
    let t85 = t80 ^ t82;
    let t86 = t80 ^ t81;
    let t87 = t82 ^ t83;
    let t88 = t85 ^ t84;
    let t89 = t87 & t5;
    let t90 = t83 & t11;
    let t91 = t82 & u7;
    let t92 = t86 & t21;
    let t93 = t81 & t4;
    let t94 = t80 & t17;
    let t95 = t85 & t8;
    let t96 = t88 & t39;
    let t97 = t84 & t14;
    let t98 = t87 & t19;
    let t99 = t83 & t20;
    let t100 = t82 & t10;
    let t101 = t86 & t7;
    let t102 = t81 & t9;
    let t103 = t80 & t22;
    let t104 = t85 & t2;
    let t105 = t88 & t41;
    let t106 = t84 & t16;
    let t107 = t104 ^ t105;
    let t108 = t93 ^ t99;
    let t109 = t96 ^ t107;
    let t110 = t98 ^ t108;
    let t111 = t91 ^ t101;
    let t112 = t89 ^ t92;
    let t113 = t107 ^ t112;
    let t114 = t90 ^ t110;
    let t115 = t89 ^ t95;
    let t116 = t94 ^ t102;
    let t117 = t97 ^ t103;
    let t118 = t91 ^ t114;
    let t119 = t111 ^ t117;
    let t120 = t100 ^ t108;
    let t121 = t92 ^ t95;
    let t122 = t110 ^ t121;
    let t123 = t106 ^ t119;
    let t124 = t104 ^ t115;
    let t125 = t111 ^ t116;

    planes[7] = t109 ^ t122;
    planes[5] = !(t123 ^ t124);
    let t128 = t94 ^ t107;
    planes[4] = t113 ^ t114;
    planes[3] = t118 ^ t128;
    let t131 = t93 ^ t101;
    let t132 = t112 ^ t120;
    planes[0] = !(t113 ^ t125);
    let t134 = t97 ^ t116;
    let t135 = t131 ^ t134;
    let t136 = t93 ^ t115;
    planes[1] = !(t109 ^ t135);
    let t138 = t119 ^ t132;
    planes[2] = t109 ^ t138;
    let t140 = t114 ^ t136;
    planes[6] = !(t109 ^ t140);
}
